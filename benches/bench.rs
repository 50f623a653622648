use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use minifloat_conv::{bench, convert, report, Word12};

// Time converting 1 word

const WORDS: [Word12; 5] = [
  Word12::from_bits_truncate(0b000000000001),
  Word12::from_bits_truncate(0b000000011111),
  Word12::from_bits_truncate(0b011111111111),
  Word12::from_bits_truncate(0b100000000000),
  Word12::from_bits_truncate(0b110010110110),
];

fn convert_one(c: &mut Criterion) {
  let mut g = c.benchmark_group("convert");
  for word in WORDS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(word), &word, |b, &word| {
      b.iter(|| bench::convert_word(black_box(word)));
    });
  }
  g.finish();
}

// Time each stage on its own

fn stages(c: &mut Criterion) {
  let mut g = c.benchmark_group("stages");
  let word = WORDS[4];
  let magnitude = convert::sign_magnitude(word).magnitude;
  let extracted = convert::extract_significand(magnitude);
  let exp = convert::exponent_of(magnitude);
  let (exp_r, frac_r) = convert::round_half_up(exp, extracted);
  let fields = minifloat_conv::Fields::bench_new_unchecked(true, exp_r, frac_r);
  g.throughput(Throughput::Elements(1));
  g.bench_function("sign_magnitude", |b| b.iter(|| bench::sign_magnitude(black_box(word))));
  g.bench_function("exponent_of", |b| b.iter(|| bench::exponent_of(black_box(magnitude))));
  g.bench_function("extract_significand", |b| b.iter(|| bench::extract_significand(black_box(magnitude))));
  g.bench_function("round_half_up", |b| b.iter(|| bench::round_half_up(black_box(exp), black_box(extracted))));
  g.bench_function("pack", |b| b.iter(|| bench::pack(black_box(fields))));
  g.finish();
}

// Time the full range, with and without formatting

fn full_range(c: &mut Criterion) {
  let mut g = c.benchmark_group("full_range");
  g.throughput(Throughput::Elements(4096));
  g.bench_function("convert", |b| {
    b.iter(|| Word12::all().map(|w| black_box(w).to_fp8().to_bits() as u32).sum::<u32>());
  });
  g.bench_function("format", |b| {
    let mut buf = Vec::with_capacity(4096 * 56);
    b.iter(|| {
      buf.clear();
      let lines: Vec<_> = report::sweep().collect();
      report::write_lines(&mut buf, &lines).unwrap()
    });
  });
  g.finish();
}

criterion_group!(benches,
  convert_one,
  stages,
  full_range,
);
criterion_main!(benches);
