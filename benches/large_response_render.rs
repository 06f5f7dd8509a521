use criterion::{Criterion, black_box, criterion_group, criterion_main};
use litepost::model::ResponseDescriptor;
use litepost::render::{RenderState, render_body};
use litepost::ui::highlight::highlight_text;

fn large_json(items: usize) -> String {
    let rows: Vec<serde_json::Value> = (0..items)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("item-{i}"),
                "tags": ["a", "b", "c"],
                "nested": {"active": i % 2 == 0, "score": i as f64 * 1.5}
            })
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

fn bench_render(c: &mut Criterion) {
    let body = large_json(5_000);
    let html = format!("<html><body>{}</body></html>", "<p>x & y</p>".repeat(20_000));
    let response = ResponseDescriptor {
        status_code: 200,
        duration: 12.0,
        size: body.len() as u64,
        headers: (0..50).map(|i| (format!("X-Header-{i}"), "v".to_string())).collect(),
        body: body.clone(),
    };

    c.bench_function("render_body_json_5k", |b| b.iter(|| render_body(black_box(&body))));
    c.bench_function("render_body_html_escape", |b| b.iter(|| render_body(black_box(&html))));
    c.bench_function("render_state_json_5k", |b| {
        b.iter(|| RenderState::from_response(black_box(&response)))
    });

    let pretty = render_body(&body).text;
    c.bench_function("highlight_json_5k", |b| b.iter(|| highlight_text(black_box(&pretty), "json")));
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
