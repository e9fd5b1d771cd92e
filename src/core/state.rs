//! Authoritative game state.
//!
//! ## Transitions
//!
//! - `make_bet`: validate, replace the pending bet, pass the turn on.
//! - `call_challenge`: tally the table, take one die from the loser, then
//!   either end the game or start a new round.
//! - new round (internal): re-roll every cup, clear the bet.
//!
//! ## Invariants
//!
//! Between operations:
//! - `dice_count()` equals the sum of all cup sizes;
//! - the current player holds dice;
//! - palifico is set only right after a challenge that left the loser with
//!   one die while more than two players still hold dice.
//!
//! A `GameState` is single-owner. Share it across threads behind a
//! `Mutex`; independent games need no coordination since each owns its RNG.

use im::Vector;
use tracing::debug;

use super::action::{ChallengeOutcome, Move, TurnRecord};
use super::bet::Bet;
use super::config::GameConfig;
use super::cup::Cup;
use super::player::{Player, PlayerId};
use super::rng::{GameRng, GameRngState};
use super::seats::ActiveSeats;
use crate::error::{BettingError, IllegalMoveError};
use crate::moves::{MoveGenerator, ScoredMove, TableView};
use crate::rules::{bet_holds, count_matches, validate_bet};

/// A game of Perudo in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    /// Seating order never changes; eliminated players keep an empty cup.
    players: Vec<Player>,

    /// Seats that still hold dice.
    seats: ActiveSeats,

    current_bet: Option<Bet>,
    current_player: PlayerId,

    /// Round number (starts at 1).
    round: u32,

    /// Moves made in the current round.
    sequence: u32,

    /// Sum of all cup sizes.
    dice_count: u32,

    palifico: bool,

    rng: GameRng,
    generator: MoveGenerator,

    history: Vector<TurnRecord>,
    last_challenge: Option<ChallengeOutcome>,
}

impl GameState {
    /// Deal a new game.
    ///
    /// Every player gets a full cup and a random seat opens the first round.
    ///
    /// # Panics
    ///
    /// Panics if the configuration breaks its construction contract
    /// (no players, dice with fewer than 2 sides, empty starting cups).
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Deal a new game from an existing random stream.
    ///
    /// The stream replaces `config.seed`: use `GameRng::fork` to spawn many
    /// games from one master seed, or `GameRng::from_state` to resume dealing
    /// from a saved position.
    ///
    /// # Panics
    ///
    /// Same contract as [`GameState::new`].
    #[must_use]
    pub fn with_rng(mut config: GameConfig, mut rng: GameRng) -> Self {
        config.assert_valid();
        config.seed = Some(rng.seed());

        let players: Vec<Player> = PlayerId::all(config.player_count)
            .map(|id| Player::new(id, Cup::roll_new(config.dice_per_player, config.dice_sides, &mut rng)))
            .collect();
        let current_player = PlayerId::new(rng.gen_index(config.player_count) as u8);

        debug!(
            players = config.player_count,
            sides = config.dice_sides,
            dice_per_player = config.dice_per_player,
            seed = rng.seed(),
            first = %current_player,
            "new game"
        );

        Self {
            seats: ActiveSeats::new(config.player_count),
            dice_count: config.total_dice(),
            config,
            players,
            current_bet: None,
            current_player,
            round: 1,
            sequence: 0,
            palifico: false,
            rng,
            generator: MoveGenerator::default(),
            history: Vector::new(),
            last_challenge: None,
        }
    }

    /// Replace the move generator (and with it the calibration).
    #[must_use]
    pub fn with_move_generator(mut self, generator: MoveGenerator) -> Self {
        self.generator = generator;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn dice_sides(&self) -> u8 {
        self.config.dice_sides
    }

    /// Seed the dice were rolled from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the dice stream, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The active player before the current one (the pending bettor).
    #[must_use]
    pub fn previous_player(&self) -> PlayerId {
        self.seats
            .previous_before(self.current_player)
            .unwrap_or(self.current_player)
    }

    /// The active player after the current one.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.seats
            .next_after(self.current_player)
            .unwrap_or(self.current_player)
    }

    #[must_use]
    pub fn current_bet(&self) -> Option<Bet> {
        self.current_bet
    }

    /// Dice remaining in play.
    #[must_use]
    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    /// Players that still hold dice.
    #[must_use]
    pub fn players_left(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_palifico(&self) -> bool {
        self.palifico
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.seats.len() <= 1
    }

    /// The last player holding dice, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_over() {
            self.seats.iter().next()
        } else {
            None
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Read-only view of a seat's dice.
    #[must_use]
    pub fn cup_of(&self, seat: PlayerId) -> &[u8] {
        self.players[seat.index()].cup.faces()
    }

    #[must_use]
    pub fn cup(&self, seat: PlayerId) -> &Cup {
        &self.players[seat.index()].cup
    }

    /// Every move applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Resolution of the most recent challenge.
    #[must_use]
    pub fn last_challenge(&self) -> Option<&ChallengeOutcome> {
        self.last_challenge.as_ref()
    }

    /// The table as the current player sees it.
    #[must_use]
    pub fn table_view(&self) -> TableView<'_> {
        TableView {
            total_dice: self.dice_count,
            sides: self.config.dice_sides,
            own_cup: self.cup(self.current_player),
            previous_dice: self.cup(self.previous_player()).len() as u32,
            next_dice: self.cup(self.next_player()).len() as u32,
            current_bet: self.current_bet,
            palifico: self.palifico,
        }
    }

    /// Every legal move for the current player, scored.
    ///
    /// Computed fresh from the current state on each call.
    #[must_use]
    pub fn enumerate_moves(&self) -> Vec<ScoredMove> {
        if self.is_over() {
            return Vec::new();
        }
        self.generator.enumerate_view(&self.table_view())
    }

    /// Check the state invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let sum: u32 = self.players.iter().map(Player::dice_count).sum();
        let max = usize::from(self.config.dice_per_player);

        sum == self.dice_count
            && self.players.iter().all(|p| p.cup.len() <= max)
            && self
                .players
                .iter()
                .all(|p| p.is_active() == self.seats.contains(p.id))
            && (self.seats.is_empty() || self.seats.contains(self.current_player))
    }

    // === Transitions ===

    /// Place a bet for the current player.
    ///
    /// On failure the state is unchanged.
    pub fn make_bet(&mut self, face: u8, quantity: u32) -> Result<(), BettingError> {
        if self.is_over() {
            return Err(BettingError::GameOver);
        }

        let bet = Bet::new(face, quantity);
        validate_bet(
            bet,
            self.current_bet,
            self.dice_count,
            self.config.dice_sides,
            self.palifico,
        )?;

        debug!(player = %self.current_player, face, quantity, round = self.round, "bet");

        self.record(Move::PlaceBet(bet));
        self.current_bet = Some(bet);
        self.current_player = self.next_player();
        Ok(())
    }

    /// Challenge the pending bet for the current player.
    ///
    /// Returns the challenge's calibrated success score computed before the
    /// dice were revealed. On failure the state is unchanged.
    pub fn call_challenge(&mut self) -> Result<f64, IllegalMoveError> {
        if self.is_over() {
            return Err(IllegalMoveError::GameOver);
        }
        let bet = self.current_bet.ok_or(IllegalMoveError::NoBetToChallenge)?;

        let probability = self
            .generator
            .challenge_score(&self.table_view())
            .unwrap_or_default();

        let challenger = self.current_player;
        let bettor = self.previous_player();
        let actual = count_matches(self.players.iter().map(|p| &p.cup), bet.face, self.palifico);
        let loser = if bet_holds(actual, bet) { challenger } else { bettor };

        self.record(Move::Challenge);

        // Palifico lasts exactly one round.
        self.palifico = false;

        let cup = &mut self.players[loser.index()].cup;
        cup.lose_die();
        let remaining = cup.len();
        self.dice_count -= 1;

        let eliminated = remaining == 0;
        if eliminated {
            self.seats.remove(loser);
        }
        self.palifico = remaining == 1 && self.seats.len() > 2;

        debug!(
            challenger = %challenger,
            bettor = %bettor,
            face = bet.face,
            quantity = bet.quantity,
            actual,
            loser = %loser,
            remaining,
            "challenge resolved"
        );

        self.last_challenge = Some(ChallengeOutcome {
            challenger,
            bettor,
            bet,
            actual,
            loser,
            eliminated,
            palifico_next: self.palifico,
            probability,
        });

        if eliminated {
            debug!(player = %loser, players_left = self.seats.len(), "player eliminated");
            self.current_player = self.seats.next_after(loser).unwrap_or(loser);

            if self.is_over() {
                self.current_bet = None;
                debug!(winner = %self.current_player, rounds = self.round, "game over");
                return Ok(probability);
            }
        } else {
            self.current_player = loser;
        }

        if self.palifico {
            debug!(player = %loser, "palifico round");
        }

        self.start_new_round();
        Ok(probability)
    }

    /// Apply any move for the current player.
    ///
    /// Returns the challenge score for a challenge, `None` for a bet.
    pub fn apply_move(&mut self, mv: Move) -> crate::error::Result<Option<f64>> {
        match mv {
            Move::Challenge => Ok(Some(self.call_challenge()?)),
            Move::PlaceBet(bet) => {
                self.make_bet(bet.face, bet.quantity)?;
                Ok(None)
            }
        }
    }

    fn start_new_round(&mut self) {
        let sides = self.config.dice_sides;
        for player in &mut self.players {
            player.cup.reroll(sides, &mut self.rng);
        }
        self.current_bet = None;
        self.round += 1;
        self.sequence = 0;
    }

    fn record(&mut self, mv: Move) {
        self.history
            .push_back(TurnRecord::new(self.current_player, mv, self.round, self.sequence));
        self.sequence += 1;
    }

    /// Replace every cup with known faces, keeping the dice count in sync.
    ///
    /// For setting up specific tables in tests and analysis tools. Seats
    /// given an empty cup are eliminated.
    ///
    /// # Panics
    ///
    /// Panics if `cups` does not have one entry per seat, a cup is larger
    /// than the starting size, or the current player would be left without
    /// dice while others hold some.
    pub fn set_cups(&mut self, cups: &[&[u8]]) {
        assert_eq!(cups.len(), self.players.len(), "one cup per seat");

        let mut seats = ActiveSeats::new(self.players.len());
        for (player, faces) in self.players.iter_mut().zip(cups) {
            assert!(
                faces.len() <= usize::from(self.config.dice_per_player),
                "cup larger than the starting size"
            );
            player.cup = Cup::from_faces(faces);
            if player.cup.is_empty() {
                seats.remove(player.id);
            }
        }

        assert!(
            seats.is_empty() || seats.contains(self.current_player),
            "current player must hold dice"
        );
        self.seats = seats;
        self.dice_count = self.players.iter().map(Player::dice_count).sum();
    }

    /// Move the turn to `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` holds no dice.
    pub fn set_current_player(&mut self, seat: PlayerId) {
        assert!(self.seats.contains(seat), "current player must hold dice");
        self.current_player = seat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(players: usize, seed: u64) -> GameState {
        GameState::new(GameConfig::new(players).with_seed(seed))
    }

    #[test]
    fn test_new_game() {
        let state = game(4, 42);

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.dice_count(), 20);
        assert_eq!(state.players_left(), 4);
        assert_eq!(state.round(), 1);
        assert_eq!(state.current_bet(), None);
        assert!(!state.is_palifico());
        assert!(!state.is_over());
        assert!(state.is_consistent());
        for seat in PlayerId::all(4) {
            assert_eq!(state.cup_of(seat).len(), 5);
        }
    }

    #[test]
    fn test_seeded_games_match() {
        let a = game(3, 9);
        let b = game(3, 9);

        assert_eq!(a.current_player(), b.current_player());
        for seat in PlayerId::all(3) {
            assert_eq!(a.cup_of(seat), b.cup_of(seat));
        }
    }

    #[test]
    fn test_with_rng_matches_saved_position() {
        let config = GameConfig::new(4);
        let rng = GameRng::new(99);
        let saved = rng.state();

        let a = GameState::with_rng(config.clone(), rng);
        let b = GameState::with_rng(config, GameRng::from_state(&saved));

        assert_eq!(a.seed(), 99);
        assert_eq!(a.config().seed, Some(99));
        assert_eq!(a.current_player(), b.current_player());
        assert_eq!(a.rng_state(), b.rng_state());
        for seat in PlayerId::all(4) {
            assert_eq!(a.cup_of(seat), b.cup_of(seat));
        }
    }

    #[test]
    fn test_forked_games_are_reproducible() {
        let deal = |master_seed: u64| -> Vec<Vec<Vec<u8>>> {
            let mut master = GameRng::new(master_seed);
            (0..3)
                .map(|_| {
                    let state = GameState::with_rng(GameConfig::new(3), master.fork());
                    PlayerId::all(3).map(|p| state.cup_of(p).to_vec()).collect()
                })
                .collect()
        };

        let first = deal(5);
        assert_eq!(first, deal(5));
        assert!(first[0] != first[1] || first[1] != first[2]);
    }

    #[test]
    fn test_rng_state_advances_only_on_reroll() {
        let mut state = game(3, 8);
        state.set_current_player(PlayerId::new(0));
        state.set_cups(&[&[2, 2], &[5, 5], &[6, 6]]);
        let dealt = state.rng_state();

        state.make_bet(2, 2).unwrap();
        assert_eq!(state.rng_state(), dealt);

        state.call_challenge().unwrap();
        let rerolled = state.rng_state();
        assert_eq!(rerolled.seed, 8);
        assert!(rerolled.word_pos > dealt.word_pos);
    }

    #[test]
    fn test_bet_advances_turn() {
        let mut state = game(3, 1);
        state.set_current_player(PlayerId::new(2));

        state.make_bet(3, 2).unwrap();

        assert_eq!(state.current_bet(), Some(Bet::new(3, 2)));
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0], TurnRecord::new(PlayerId::new(2), Move::bet(3, 2), 1, 0));
    }

    #[test]
    fn test_rejected_bet_leaves_state() {
        let mut state = game(3, 1);
        state.make_bet(4, 3).unwrap();
        let player = state.current_player();

        assert_eq!(state.make_bet(4, 3), Err(BettingError::MustRaise));
        assert_eq!(state.current_player(), player);
        assert_eq!(state.current_bet(), Some(Bet::new(4, 3)));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_challenge_without_bet() {
        let mut state = game(3, 1);
        let player = state.current_player();

        assert_eq!(state.call_challenge(), Err(IllegalMoveError::NoBetToChallenge));
        assert_eq!(state.current_player(), player);
        assert_eq!(state.dice_count(), 15);
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn test_true_bet_costs_challenger() {
        let mut state = game(3, 1);
        state.set_cups(&[&[2, 2, 3], &[1, 5, 6], &[4, 4, 4]]);
        state.set_current_player(PlayerId::new(0));

        // Three twos on the table (two plus a wild one)
        state.make_bet(2, 3).unwrap();
        state.call_challenge().unwrap();

        let outcome = state.last_challenge().unwrap();
        assert_eq!(outcome.actual, 3);
        assert_eq!(outcome.loser, PlayerId::new(1));
        assert!(!outcome.challenger_won());
        assert_eq!(state.cup_of(PlayerId::new(1)).len(), 2);
        assert_eq!(state.dice_count(), 8);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.round(), 2);
        assert_eq!(state.current_bet(), None);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_false_bet_costs_bettor() {
        let mut state = game(3, 1);
        state.set_cups(&[&[2, 2, 3], &[1, 5, 6], &[4, 4, 4]]);
        state.set_current_player(PlayerId::new(0));

        state.make_bet(2, 4).unwrap();
        state.call_challenge().unwrap();

        let outcome = state.last_challenge().unwrap();
        assert_eq!(outcome.loser, PlayerId::new(0));
        assert!(outcome.challenger_won());
        assert_eq!(state.cup_of(PlayerId::new(0)).len(), 2);
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_palifico_triggers_on_last_die() {
        let mut state = game(3, 1);
        state.set_cups(&[&[3, 3], &[5, 5], &[6, 6]]);
        state.set_current_player(PlayerId::new(0));

        state.make_bet(4, 5).unwrap();
        state.call_challenge().unwrap();

        assert_eq!(state.cup_of(PlayerId::new(0)).len(), 1);
        assert!(state.is_palifico());
        assert!(state.last_challenge().unwrap().palifico_next);
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_palifico_needs_more_than_two_players() {
        let mut state = game(2, 1);
        state.set_cups(&[&[3, 3], &[5, 5]]);
        state.set_current_player(PlayerId::new(0));

        state.make_bet(4, 4).unwrap();
        state.call_challenge().unwrap();

        assert_eq!(state.cup_of(PlayerId::new(0)).len(), 1);
        assert!(!state.is_palifico());
    }

    #[test]
    fn test_palifico_ones_not_wild_in_tally() {
        let mut state = game(3, 1);
        state.set_cups(&[&[3, 3], &[5, 1], &[6, 6]]);
        state.set_current_player(PlayerId::new(0));
        state.make_bet(4, 5).unwrap();
        state.call_challenge().unwrap();
        assert!(state.is_palifico());

        // Player 0 opens the palifico round.
        state.set_cups(&[&[3], &[3, 1], &[6, 6]]);
        state.make_bet(3, 3).unwrap();
        assert_eq!(state.make_bet(4, 3), Err(BettingError::PalificoFaceChange { face: 4, required: 3 }));
        state.call_challenge().unwrap();

        // Only two real threes; the one does not count.
        let outcome = state.last_challenge().unwrap();
        assert_eq!(outcome.actual, 2);
        assert_eq!(outcome.loser, PlayerId::new(0));
        assert!(outcome.eliminated);
        assert!(!state.is_palifico());
        assert_eq!(state.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_elimination_skips_seat() {
        let mut state = game(3, 1);
        state.set_cups(&[&[2, 2], &[4], &[6, 6]]);
        state.set_current_player(PlayerId::new(1));

        // Player 1 bets five fives and is caught
        state.make_bet(5, 5).unwrap();
        state.call_challenge().unwrap();

        assert!(state.last_challenge().unwrap().eliminated);
        assert_eq!(state.players_left(), 2);
        assert_eq!(state.current_player(), PlayerId::new(2));
        assert_eq!(state.next_player(), PlayerId::new(0));
        assert_eq!(state.previous_player(), PlayerId::new(0));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_game_over() {
        let mut state = game(2, 1);
        state.set_cups(&[&[2], &[6, 6]]);
        state.set_current_player(PlayerId::new(0));

        state.make_bet(3, 3).unwrap();
        let round = state.round();
        state.call_challenge().unwrap();

        assert!(state.is_over());
        assert_eq!(state.players_left(), 1);
        assert_eq!(state.winner(), Some(PlayerId::new(1)));
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.current_bet(), None);
        assert_eq!(state.round(), round);
        assert_eq!(state.dice_count(), 2);
        assert!(state.enumerate_moves().is_empty());
        assert_eq!(state.make_bet(6, 1), Err(BettingError::GameOver));
        assert_eq!(state.call_challenge(), Err(IllegalMoveError::GameOver));
    }

    #[test]
    fn test_challenge_returns_generator_score() {
        let mut state = game(3, 1);
        state.set_current_player(PlayerId::new(0));
        state.make_bet(3, 4).unwrap();

        let expected = state
            .enumerate_moves()
            .into_iter()
            .find(|m| m.mv == Move::Challenge)
            .unwrap()
            .probability;

        assert_eq!(state.call_challenge().unwrap(), expected);
        assert_eq!(state.last_challenge().unwrap().probability, expected);
    }

    #[test]
    fn test_apply_move() {
        let mut state = game(2, 5);

        assert_eq!(state.apply_move(Move::bet(2, 1)), Ok(None));
        assert!(matches!(state.apply_move(Move::Challenge), Ok(Some(_))));
        assert!(state.apply_move(Move::bet(9, 1)).is_err());
    }

    #[test]
    fn test_single_player_is_over() {
        let state = game(1, 3);

        assert!(state.is_over());
        assert_eq!(state.winner(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = game(3, 4);
        let snapshot = state.clone();

        state.make_bet(2, 2).unwrap();

        assert_eq!(snapshot.current_bet(), None);
        assert!(snapshot.history().is_empty());
    }

    #[test]
    #[should_panic(expected = "current player must hold dice")]
    fn test_set_current_player_rejects_eliminated_seat() {
        let mut state = game(3, 1);
        state.set_current_player(PlayerId::new(0));
        state.set_cups(&[&[2], &[], &[3]]);
        state.set_current_player(PlayerId::new(1));
    }
}
