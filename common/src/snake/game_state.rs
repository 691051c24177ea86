use crate::defaults::{BLINK_PERIOD, START_DIRECTION, START_FOOD, START_POSITION};
use crate::log;
use crate::session_rng::SessionRng;
use super::autopilot::Autopilot;
use super::entity::Snake;
use super::food::spawn_food;
use super::input::InputMode;
use super::score::ScoreTracker;
use super::snapshot::GameSnapshot;
use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { new_high_score: Option<u32> },
    GameOver { reason: DeathReason, new_high_score: Option<u32> },
    Paused,
    Finished,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    field_size: FieldSize,
    snake: Snake,
    food: Point,
    direction: Direction,
    pending_direction: Option<Direction>,
    scores: ScoreTracker,
    paused: bool,
    game_over: Option<DeathReason>,
    blink: u32,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, high_score: u32, rng: &mut SessionRng) -> Self {
        let mut state = Self::from_parts(
            field_size,
            Snake::new(START_POSITION),
            START_DIRECTION,
            START_FOOD,
            ScoreTracker::new(high_score),
        );
        state.food = spawn_food(&state.field_size, &state.snake, rng);
        state
    }

    pub fn from_parts(
        field_size: FieldSize,
        snake: Snake,
        direction: Direction,
        food: Point,
        scores: ScoreTracker,
    ) -> Self {
        Self {
            field_size,
            snake,
            food,
            direction,
            pending_direction: None,
            scores,
            paused: false,
            game_over: None,
            blink: 0,
            tick: 0,
        }
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> Option<DeathReason> {
        self.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Queues a keyboard turn for the next update. Turns back onto the
    /// direction the snake last moved in are refused.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.is_game_over() || self.paused == paused {
            return false;
        }
        self.paused = paused;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused)
    }

    /// Back to the starting layout, running. The high score is kept.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(START_POSITION);
        self.direction = START_DIRECTION;
        self.pending_direction = None;
        self.scores.reset();
        self.paused = false;
        self.game_over = None;
        self.blink = 0;
        self.tick = 0;
        self.food = spawn_food(&self.field_size, &self.snake, rng);
    }

    /// Advances the game by one tick. With a pointer target the autopilot
    /// picks the direction; otherwise the queued keyboard turn applies.
    pub fn update(&mut self, pointer_target: Option<Point>, rng: &mut SessionRng) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Finished;
        }
        if self.paused {
            return TickOutcome::Paused;
        }

        self.blink = (self.blink + 1) % BLINK_PERIOD;
        self.tick += 1;
        self.direction = self.next_direction(pointer_target);

        // The whole current body counts, including the tail cell that would
        // be vacated by this move.
        let next_head = match self.field_size.step(self.snake.head(), self.direction) {
            None => return self.finish(DeathReason::WallCollision),
            Some(point) if self.snake.contains(&point) => {
                return self.finish(DeathReason::SelfCollision);
            }
            Some(point) => point,
        };

        self.snake.push_head(next_head);

        if next_head == self.food {
            let new_high_score = self.scores.record_food();
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.scores.score()
            );
            self.food = spawn_food(&self.field_size, &self.snake, rng);
            TickOutcome::Ate { new_high_score }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    pub fn snapshot(&self, input_mode: InputMode) -> GameSnapshot {
        GameSnapshot {
            field_size: self.field_size,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.scores.score(),
            high_score: self.scores.high_score(),
            paused: self.paused,
            game_over: self.game_over,
            input_mode,
            blink: self.blink,
            tick: self.tick,
        }
    }

    fn next_direction(&mut self, pointer_target: Option<Point>) -> Direction {
        let pending = self.pending_direction.take();

        if let Some(target) = pointer_target
            && let Some(direction) =
                Autopilot::choose_direction(&self.snake, self.direction, target, &self.field_size)
        {
            return direction;
        }

        pending.unwrap_or(self.direction)
    }

    fn finish(&mut self, reason: DeathReason) -> TickOutcome {
        self.game_over = Some(reason);
        let new_high_score = self.scores.settle();
        TickOutcome::GameOver { reason, new_high_score }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn state_with(segments: &[(usize, usize)], direction: Direction, food: (usize, usize)) -> SnakeGameState {
        let snake = Snake::from_segments(segments.iter().map(|&(x, y)| Point::new(x, y))).unwrap();
        SnakeGameState::from_parts(
            FieldSize::default(),
            snake,
            direction,
            Point::new(food.0, food.1),
            ScoreTracker::new(0),
        )
    }

    #[test]
    fn test_plain_move_keeps_length_and_score() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(20, 20)], Direction::Right, (30, 20));

        assert_eq!(state.update(None, &mut rng), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Point::new(21, 20));
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.scores().score(), 0);
        assert_eq!(state.food(), Point::new(30, 20));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(29, 20)], Direction::Right, (30, 20));

        let outcome = state.update(None, &mut rng);
        assert_eq!(outcome, TickOutcome::Ate { new_high_score: Some(10) });
        assert_eq!(state.snake().head(), Point::new(30, 20));
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.scores().score(), 10);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_wall_collision_ends_game_and_settles_high_score() {
        let mut rng = SessionRng::new(1);
        let snake = Snake::new(Point::new(0, 20));
        let mut state = SnakeGameState::from_parts(
            FieldSize::default(),
            snake,
            Direction::Left,
            Point::new(30, 20),
            ScoreTracker::restore(30, 20),
        );

        let outcome = state.update(None, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { reason: DeathReason::WallCollision, new_high_score: Some(30) }
        );
        assert_eq!(state.game_over(), Some(DeathReason::WallCollision));
        assert_eq!(state.scores().high_score(), 30);
        assert_eq!(state.snake().head(), Point::new(0, 20));

        assert_eq!(state.update(None, &mut rng), TickOutcome::Finished);
        assert!(!state.request_direction(Direction::Up));
        assert!(!state.toggle_pause());
    }

    #[test]
    fn test_moving_into_current_tail_is_collision() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(0, 0), (1, 0), (1, 1), (0, 1)], Direction::Left, (30, 20));

        assert!(state.request_direction(Direction::Down));
        let outcome = state.update(None, &mut rng);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { reason: DeathReason::SelfCollision, new_high_score: None }
        );
        assert_eq!(state.snake().len(), 4);
    }

    #[test]
    fn test_two_turns_between_ticks_cannot_reverse() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(20, 20), (19, 20), (18, 20)], Direction::Right, (30, 30));

        assert!(state.request_direction(Direction::Up));
        assert!(!state.request_direction(Direction::Left));
        assert_eq!(state.update(None, &mut rng), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Point::new(20, 19));
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(20, 20)], Direction::Right, (30, 20));
        assert!(state.toggle_pause());

        assert_eq!(state.update(None, &mut rng), TickOutcome::Paused);
        let snapshot = state.snapshot(InputMode::KeyboardNormal);
        assert_eq!(snapshot.snake, vec![Point::new(20, 20)]);
        assert_eq!(snapshot.blink, 0);
        assert_eq!(snapshot.tick, 0);
        assert!(snapshot.paused);
    }

    #[test]
    fn test_pointer_target_steers_over_pending_turn() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(20, 20)], Direction::Right, (0, 0));

        assert!(state.request_direction(Direction::Up));
        state.update(Some(Point::new(20, 30)), &mut rng);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), Point::new(20, 21));
    }

    #[test]
    fn test_pointer_with_no_safe_move_keeps_direction() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(0, 0), (1, 0), (1, 1), (0, 1)], Direction::Left, (30, 20));

        let outcome = state.update(Some(Point::new(10, 10)), &mut rng);
        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(
            outcome,
            TickOutcome::GameOver { reason: DeathReason::WallCollision, new_high_score: None }
        );
    }

    #[test]
    fn test_blink_cycles_every_twenty_ticks() {
        let mut rng = SessionRng::new(1);
        let mut state = state_with(&[(0, 0)], Direction::Right, (39, 39));
        for _ in 0..20 {
            state.update(None, &mut rng);
        }
        assert_eq!(state.snapshot(InputMode::KeyboardNormal).blink, 0);
        state.update(None, &mut rng);
        assert_eq!(state.snapshot(InputMode::KeyboardNormal).blink, 1);
    }

    #[test]
    fn test_reset_restores_start_and_keeps_high_score() {
        let mut rng = SessionRng::new(5);
        let mut state = state_with(&[(29, 20)], Direction::Right, (30, 20));
        state.update(None, &mut rng);
        state.set_paused(true);

        state.reset(&mut rng);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), START_POSITION);
        assert_eq!(state.direction(), START_DIRECTION);
        assert_eq!(state.scores().score(), 0);
        assert_eq!(state.scores().high_score(), 10);
        assert!(!state.is_paused());
        assert!(!state.is_game_over());
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_new_state_starts_at_center_with_food_off_snake() {
        let mut rng = SessionRng::new(9);
        let state = SnakeGameState::new(FieldSize::default(), 70, &mut rng);
        assert_eq!(state.snake().head(), Point::new(20, 20));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.scores().high_score(), 70);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_invariants_hold_over_long_random_play() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let mut state = SnakeGameState::new(FieldSize::default(), 0, &mut rng);

            for _ in 0..400 {
                let before_len = state.snake().len();
                let before_food = state.food();
                let target = rng.random_cell(state.field_size());

                match state.update(Some(target), &mut rng) {
                    TickOutcome::Ate { .. } => {
                        assert_eq!(state.snake().head(), before_food);
                        assert_eq!(state.snake().len(), before_len + 1);
                    }
                    TickOutcome::Moved => {
                        assert_ne!(state.snake().head(), before_food);
                        assert_eq!(state.snake().len(), before_len);
                    }
                    TickOutcome::GameOver { .. } => {
                        assert_eq!(state.snake().len(), before_len);
                        state.reset(&mut rng);
                        continue;
                    }
                    TickOutcome::Paused | TickOutcome::Finished => unreachable!(),
                }

                let cells: HashSet<Point> = state.snake().segments().copied().collect();
                assert_eq!(cells.len(), state.snake().len());
                assert!(!state.snake().contains(&state.food()));

                let segments: Vec<Point> = state.snake().segments().copied().collect();
                for pair in segments.windows(2) {
                    assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
                }
            }
        }
    }
}
