// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ipl_insights::{
    filter::{self, Dimension, FilterSpec},
    pages::router,
    record::Record,
    store::RecordStore,
};

const TEAMS: [&str; 10] = [
    "Chennai", "Mumbai", "Delhi", "Kolkata", "Punjab",
    "Rajasthan", "Bangalore", "Hyderabad", "Lucknow", "Gujarat",
];
const ROLES: [&str; 4] = ["batter", "bowler", "all-rounder", "wicket-keeper"];

// Synthetic league: 5 seasons, 70 matches each, 22 player rows per match.
fn synthetic_store() -> RecordStore {
    let mut records = Vec::new();
    for season in 0..5u32 {
        for m in 0..70u32 {
            let match_id = (season * 100 + m) as i64;
            let home = TEAMS[(m % 10) as usize];
            let away = TEAMS[((m * 3 + 1) % 10) as usize];
            for p in 0..22u32 {
                let side = if p < 11 { home } else { away };
                records.push(Record {
                    match_id,
                    match_name: format!("{home} vs {away}"),
                    season: (2019 + season).to_string(),
                    home_team: home.to_string(),
                    away_team: away.to_string(),
                    venue: format!("{home} Stadium"),
                    fullname: format!("{side} Player {}", p % 11),
                    role: ROLES[(p % 4) as usize].to_string(),
                    batting_innings: 1,
                    bowling_innings: (p % 2),
                    total_fp: ((match_id as u32 * 7 + p * 13) % 120) as f64,
                    captain: p % 11 == 0,
                    vice_captain: p % 11 == 1,
                    dream_team: (p + m) % 2 == 0,
                });
            }
        }
    }
    RecordStore::from_records(records)
}

fn bench_pipeline(c: &mut Criterion) {
    let store = synthetic_store();
    let all = FilterSpec::new();
    let narrow = FilterSpec::new()
        .with(Dimension::Season, ["2021", "2022"])
        .with(Dimension::Team, ["Mumbai"]);

    c.bench_function("filter_narrow", |b| {
        b.iter(|| black_box(filter::apply(black_box(&store), black_box(&narrow)).len()))
    });

    c.bench_function("render_all_pages", |b| {
        b.iter(|| {
            for page in router::all_pages() {
                black_box(page.render(black_box(&store), black_box(&all)));
            }
        })
    });

    c.bench_function("render_all_pages_narrow", |b| {
        b.iter(|| {
            for page in router::all_pages() {
                black_box(page.render(black_box(&store), black_box(&narrow)));
            }
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
