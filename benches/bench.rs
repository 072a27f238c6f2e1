// Criterion benchmarks for houseprice-web

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use houseprice_web::{DisplayContext, PredictionForm, Settings, TemplateEngine};
use minijinja::context;

fn bench_engine() -> TemplateEngine {
    let settings = Settings::default();
    let display = DisplayContext::from_settings(&settings);
    TemplateEngine::new("templates", &display, false)
}

fn bench_render_home(c: &mut Criterion) {
    let engine = bench_engine();
    c.bench_function("render_home", |b| {
        b.iter(|| engine.render(black_box("home.html"), context! {}).unwrap())
    });
}

fn bench_render_predict_with_echo(c: &mut Criterion) {
    let engine = bench_engine();
    let form = PredictionForm {
        location: Some("Camden".to_string()),
        property_type: Some("flat".to_string()),
        bedrooms: Some("3".to_string()),
        area: Some("85".to_string()),
        year_built: Some("1998".to_string()),
        distance_station: Some("0.4".to_string()),
    };

    c.bench_function("render_predict_with_echo", |b| {
        b.iter(|| {
            engine
                .render(black_box("predict.html"), context! { form_data => form.clone() })
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_render_home, bench_render_predict_with_echo);
criterion_main!(benches);
