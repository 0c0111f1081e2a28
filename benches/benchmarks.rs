use cardkey::codec::*;
use num_bigint::BigUint;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        reading_the_basis,
        encoding_a_sequence,
        decoding_a_value,
        validating_card_text,
        dispatching_hex_text,
}

const CARDS: &str = "4H QD 8C 7C 9C 3D KC JS AC 3S TS QS 5H JH TH 5S KS 3C 2C 6C JD 6H 6S KH 8H KD 9H 3H AD 7H JC";

fn reading_the_basis(c: &mut criterion::Criterion) {
    c.bench_function("read the 31 falling-factorial weights", |b| {
        b.iter(|| Basis::weights().iter().map(BigUint::bits).sum::<u64>())
    });
}

fn encoding_a_sequence(c: &mut criterion::Criterion) {
    let sequence = Sequence::try_from(CARDS).unwrap();
    c.bench_function("encode 31 cards to a Value", |b| {
        b.iter(|| Value::from(&sequence))
    });
}

fn decoding_a_value(c: &mut criterion::Criterion) {
    let value = Value::try_from(BigUint::from(1u32) << 160u32).unwrap();
    c.bench_function("decode a Value to 31 cards", |b| {
        b.iter(|| Sequence::from(&value))
    });
}

fn validating_card_text(c: &mut criterion::Criterion) {
    c.bench_function("validate a 31-card listing", |b| {
        b.iter(|| Sequence::try_from(CARDS))
    });
}

fn dispatching_hex_text(c: &mut criterion::Criterion) {
    c.bench_function("convert hexadecimal text to card text", |b| {
        b.iter(|| decode("10000000000000000000000000000000000000000"))
    });
}
