use criterion::{Criterion, criterion_group, criterion_main};
use recipemend::{Diags, Options, repair_recipe, repair_text};

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    let cases = vec![
        r#"{"titleZh": "麻婆豆腐" "summary": {"servings": 2}}"#,
        r#"{'name': '宫保鸡丁', steps: ['焯水', '爆炒']}"#,
        r#"```json
        {"titleZh": "汤", "tags": ["清淡", "快手",],}
        ```
        "#,
        "{\"titleZh\"：\"标题\"，\"summary\"：{\"servings\"：2}}",
        r#"{"titleZh": "曲奇", "ingredients": [{"name": "黄油", "amount": 1/2, "unit": 块}]}"#,
    ];
    let opts = Options::default();
    for (i, s) in cases.iter().copied().enumerate() {
        group.bench_function(format!("text_case_{}", i), |b| {
            b.iter(|| {
                let mut diags = Diags::new();
                let out = repair_text(std::hint::black_box(s), &opts, &mut diags);
                std::hint::black_box(out);
            })
        });
    }
    for (i, s) in cases.iter().copied().enumerate() {
        group.bench_function(format!("full_case_{}", i), |b| {
            b.iter(|| {
                let out = repair_recipe(std::hint::black_box(s), "样品菜", &opts);
                std::hint::black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repair);
criterion_main!(benches);
