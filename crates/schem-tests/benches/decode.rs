use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use schem_binder::load_schematic;
use schem_decoder::SchemDecoder;
use schem_tests::{TagWriter, compound, gzip, region, sample_bytes};
use schem_types::{Tag, TagTree};
use schem_wire::ByteCursor;

/// A schematic with `regions` regions of 64 palette entries and a
/// 4096-long block-state array each.
fn large_schematic(regions: usize) -> Vec<u8> {
    let names: Vec<String> = (0..64).map(|i| format!("minecraft:block_{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let region_tags: Vec<(String, Tag)> = (0..regions)
        .map(|i| {
            let mut tag = region((0, 0, 0), (16, 16, 16), &names);
            if let Tag::Compound(c) = &mut tag {
                c.insert("BlockStates", Tag::LongArray(vec![0x5555; 4096]));
            }
            (format!("Region{i}"), tag)
        })
        .collect();
    let root = compound([
        ("Version", Tag::Int(6)),
        (
            "Metadata",
            Tag::Compound(schem_tests::metadata(None)),
        ),
        ("Regions", Tag::Compound(region_tags.into_iter().collect())),
    ]);
    TagWriter::encode_tree(&TagTree::new("", root))
}

fn bench_decode_sample(c: &mut Criterion) {
    let bytes = sample_bytes();
    c.bench_function("decode_sample", |b| {
        b.iter(|| SchemDecoder::decode(&bytes).unwrap());
    });
}

fn bench_load_gzip(c: &mut Criterion) {
    let bytes = gzip(&sample_bytes());
    c.bench_function("load_sample_gzip", |b| {
        b.iter(|| load_schematic(&bytes).unwrap());
    });
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");
    for regions in [1, 8, 32] {
        let bytes = large_schematic(regions);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(regions), &bytes, |b, bytes| {
            b.iter(|| SchemDecoder::decode(bytes).unwrap());
        });
    }
    group.finish();
}

fn bench_read_strings(c: &mut Criterion) {
    let mut writer = TagWriter::new();
    for i in 0..1000 {
        writer.name(&format!("minecraft:block_{i}"));
    }
    let bytes = writer.finish();

    c.bench_function("cursor_read_1000_strings", |b| {
        b.iter(|| {
            let mut cursor = ByteCursor::new(&bytes);
            while !cursor.is_empty() {
                cursor.read_string().unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_decode_sample,
    bench_load_gzip,
    bench_decode_throughput,
    bench_read_strings
);
criterion_main!(benches);
