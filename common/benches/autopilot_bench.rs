use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::session_rng::SessionRng;
use common::snake::{Autopilot, Direction, FieldSize, Point, ScoreTracker, Snake, SnakeGameState};

/// A snake folded back and forth across the lower half of the board.
fn create_long_snake(field_size: &FieldSize) -> Snake {
    let mut segments = Vec::new();
    for y in (field_size.height / 2..field_size.height).rev() {
        let row: Vec<usize> = if y % 2 == 0 {
            (0..field_size.width).collect()
        } else {
            (0..field_size.width).rev().collect()
        };
        segments.extend(row.into_iter().map(|x| Point::new(x, y)));
    }
    segments.reverse();
    Snake::from_segments(segments).unwrap()
}

fn bench_single_choice_long_snake() {
    let field_size = FieldSize::default();
    let snake = create_long_snake(&field_size);
    black_box(Autopilot::choose_direction(
        &snake,
        Direction::Left,
        Point::new(5, 2),
        &field_size,
    ));
}

fn bench_pointer_game_1000_ticks() {
    let mut rng = SessionRng::new(7);
    let mut state = SnakeGameState::from_parts(
        FieldSize::default(),
        Snake::new(Point::new(20, 20)),
        Direction::Right,
        Point::new(30, 20),
        ScoreTracker::new(0),
    );

    for tick in 0..1000 {
        if state.is_game_over() {
            state.reset(&mut rng);
        }
        let target = Point::new((tick * 7) % 40, (tick * 13) % 40);
        black_box(state.update(Some(target), &mut rng));
    }
}

fn autopilot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("autopilot");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("single_choice_long_snake", |b| {
        b.iter(bench_single_choice_long_snake)
    });

    group.bench_function("pointer_game_1000_ticks", |b| {
        b.iter(bench_pointer_game_1000_ticks)
    });

    group.finish();
}

criterion_group!(benches, autopilot_bench);
criterion_main!(benches);
