/// Shown before the interactive prompt and after `--help`.
pub const USAGE: &str = "\
Enter a list of 31 playing cards in the format
AS 2H 3D 4C 5S 6H 7D 8C 9S TH JD QC KS ...

or a hexadecimal number in the range
0 to 114882682E46B11EADE9F57C1E3E0BBD47FFFFFFF (52! / (52-31)! - 1)

In either case you may include spaces or not as you wish.
Use T rather than 10.  For example TH for ten of hearts.
Upper and lower case letters are equivalent.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Basis;

    #[test]
    fn advertised_limit_is_exact() {
        assert!(USAGE.contains(&format!("0 to {} ", Basis::hex())));
    }
}
