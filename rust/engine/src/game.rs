use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::dealer::DealerPolicy;
use crate::deck::CardPool;
use crate::errors::GameError;
use crate::player::{Player, PlayerAction};
use crate::state::{GamePhase, Outcome, PlayerState, RoundState};

/// Seed used by [`Game::new`] when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

pub const PLAYER_NAME: &str = "Player";
pub const DEALER_NAME: &str = "Dealer";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Seat {
    Player,
    Dealer,
}

/// One player against one dealer, one fresh deck per round.
///
/// All randomness comes from the injected generator, so two games built from
/// the same seed and fed the same actions produce identical snapshots.
///
/// # Examples
///
/// ```
/// use blackjack_engine::dealer::DealerPolicy;
/// use blackjack_engine::game::Game;
/// use blackjack_engine::player::PlayerAction;
///
/// let mut game = Game::new(DealerPolicy::reach17(), Some(7));
/// let state = game.next_round().expect("round starts");
/// assert_eq!(state.player_hand.len(), 2);
///
/// let (_, round) = game.act(PlayerAction::Stand).expect("stand is legal");
/// assert!(round.has_round_ended);
/// assert!(round.outcome.is_some());
/// ```
#[derive(Debug)]
pub struct Game<R = ChaCha20Rng> {
    policy: DealerPolicy,
    rng: R,
    phase: GamePhase,
    player: Player,
    dealer: Player,
    pool: CardPool,
    /// Last snapshot taken during the player's turn.
    state: Option<PlayerState>,
    rounds: u64,
}

impl Game<ChaCha20Rng> {
    pub fn new(policy: DealerPolicy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self::with_rng(policy, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(policy: DealerPolicy, rng: R) -> Self {
        Self {
            policy,
            rng,
            phase: GamePhase::Setup,
            player: Player::new(PLAYER_NAME),
            dealer: Player::new(DEALER_NAME),
            pool: CardPool::new(),
            state: None,
            rounds: 0,
        }
    }

    pub fn policy(&self) -> DealerPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DealerPolicy) {
        self.policy = policy;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn card_pool(&self) -> &CardPool {
        &self.pool
    }

    /// Latest player-facing snapshot, if a round has been started.
    pub fn state(&self) -> Option<&PlayerState> {
        self.state.as_ref()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Starts a new round with a fresh pool, player and dealer.
    pub fn next_round(&mut self) -> Result<PlayerState, GameError> {
        self.start_round(CardPool::new())
    }

    /// Like [`Game::next_round`], but the pool deals `order` first. Initial
    /// deals alternate player, dealer, player, dealer; later cards go to
    /// whoever hits.
    pub fn next_round_stacked(&mut self, order: &[Card]) -> Result<PlayerState, GameError> {
        let pool = CardPool::stacked(order)?;
        self.start_round(pool)
    }

    fn start_round(&mut self, pool: CardPool) -> Result<PlayerState, GameError> {
        self.phase = GamePhase::Setup;
        self.player = Player::new(PLAYER_NAME);
        self.dealer = Player::new(DEALER_NAME);
        self.pool = pool;
        self.state = None;

        for _ in 0..2 {
            let card = self.pool.deal_card(&mut self.rng)?;
            self.player.hand_mut().add_card(card);
            let card = self.pool.deal_card(&mut self.rng)?;
            self.dealer.hand_mut().add_card(card);
        }
        // only a pair of aces can bust two cards
        if self.player.hand().is_bust() {
            self.player.hand_mut().use_ace();
        }

        self.phase = GamePhase::PlayerTurn;
        self.rounds += 1;
        let state = self.refresh_state()?;
        debug!(
            round = self.rounds,
            player_total = self.player.hand().calculate_total(),
            dealer_up = %state.dealer_revealed_card,
            "round started"
        );
        Ok(state)
    }

    /// Applies a player action and returns the updated snapshot together with
    /// the round progress.
    pub fn act(&mut self, action: PlayerAction) -> Result<(PlayerState, RoundState), GameError> {
        self.expect_phase(GamePhase::PlayerTurn)?;
        let round = match action {
            PlayerAction::Hit => self.hit()?,
            PlayerAction::Stand => self.stand()?,
        };
        let state = self.state.clone().ok_or(GameError::InvalidPhase {
            expected: GamePhase::PlayerTurn,
            actual: self.phase,
        })?;
        Ok((state, round))
    }

    /// Dispatches a numeric action code (0 = HIT, 1 = STAND).
    pub fn act_code(&mut self, code: u8) -> Result<(PlayerState, RoundState), GameError> {
        let action = PlayerAction::try_from(code)?;
        self.act(action)
    }

    /// Deals one card to the player.
    pub fn hit(&mut self) -> Result<RoundState, GameError> {
        self.expect_phase(GamePhase::PlayerTurn)?;
        self.hit_seat(Seat::Player)
    }

    /// Ends the player's turn, plays the dealer policy and resolves the round.
    pub fn stand(&mut self) -> Result<RoundState, GameError> {
        self.expect_phase(GamePhase::PlayerTurn)?;
        self.player.mark_done();
        self.phase = GamePhase::DealerTurn;

        if self.dealer.hand().is_bust() {
            self.dealer.hand_mut().use_ace();
        }

        let target = self.player.hand().calculate_total();
        let start = self.dealer.hand().calculate_total();
        let policy = self.policy;
        let drawn = policy.run(start, target, || {
            self.hit_seat(Seat::Dealer)?;
            Ok(self.dealer.hand().calculate_total())
        })?;

        self.dealer.mark_done();
        self.phase = GamePhase::EndOfRound;
        let round = self.round_end_state();
        debug!(
            policy = %policy,
            drawn,
            player_total = target,
            dealer_total = self.dealer.hand().calculate_total(),
            outcome = ?round.outcome,
            "dealer turn finished"
        );
        Ok(round)
    }

    /// Classifies the round from the current hands.
    pub fn round_end_state(&self) -> RoundState {
        let player = self.player.hand();
        let dealer = self.dealer.hand();
        let player_total = player.calculate_total();
        let dealer_total = dealer.calculate_total();
        let outcome = Outcome::resolve(player_total, dealer_total, player.is_bust(), dealer.is_bust());
        RoundState::ended(outcome, player_total, dealer_total)
    }

    /// Undealt cards as the player sees them: the pool plus the dealer's
    /// concealed hole card, in template order.
    pub fn remaining_cards(&self) -> Vec<Card> {
        let hole = self.hole_card();
        full_deck()
            .into_iter()
            .filter(|c| self.pool.contains(c) || hole == Some(*c))
            .collect()
    }

    fn hole_card(&self) -> Option<Card> {
        if self.phase != GamePhase::PlayerTurn {
            return None;
        }
        self.dealer.hand().held().get(1).map(|h| h.card)
    }

    fn hit_seat(&mut self, seat: Seat) -> Result<RoundState, GameError> {
        let card = self.pool.deal_card(&mut self.rng)?;
        let participant = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        let hand = participant.hand_mut();
        hand.add_card(card);
        let demoted = hand.resolve_aces();
        let bust = hand.is_bust();
        let total = hand.calculate_total();
        if bust {
            participant.mark_done();
        }
        debug!(seat = ?seat, card = %card, total, demoted, bust, "card dealt");

        if seat == Seat::Player {
            self.refresh_state()?;
        }
        if bust {
            self.phase = GamePhase::EndOfRound;
            return Ok(self.round_end_state());
        }
        Ok(RoundState::in_progress(
            self.player.hand().calculate_total(),
            self.dealer_visible_total(),
        ))
    }

    /// While the hole card is hidden only the revealed card counts.
    fn dealer_visible_total(&self) -> u32 {
        match self.phase {
            GamePhase::PlayerTurn => self
                .dealer
                .hand()
                .first()
                .map_or(0, |h| h.value()),
            _ => self.dealer.hand().calculate_total(),
        }
    }

    fn refresh_state(&mut self) -> Result<PlayerState, GameError> {
        let revealed = self
            .dealer
            .hand()
            .first()
            .map(|h| h.card)
            .ok_or(GameError::InvalidPhase {
                expected: GamePhase::PlayerTurn,
                actual: self.phase,
            })?;
        let state = PlayerState {
            player_hand: self.player.hand().clone(),
            dealer_revealed_card: revealed,
            remaining_cards: self.remaining_cards(),
        };
        self.state = Some(state.clone());
        Ok(state)
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn new_game_starts_in_setup() {
        let game = Game::new(DealerPolicy::Greedy, Some(1));
        assert_eq!(game.phase(), GamePhase::Setup);
        assert!(game.state().is_none());
        assert_eq!(game.card_pool().len(), 52);
    }

    #[test]
    fn hole_card_stays_in_remaining_view() {
        let mut game = Game::new(DealerPolicy::Greedy, Some(3));
        let state = game
            .next_round_stacked(&[
                c(Rank::Two, Suit::Spades),
                c(Rank::Three, Suit::Hearts),
                c(Rank::Four, Suit::Spades),
                c(Rank::Five, Suit::Hearts),
            ])
            .unwrap();
        let hole = c(Rank::Five, Suit::Hearts);
        assert!(state.remaining_cards.contains(&hole));
        assert!(!state.remaining_cards.contains(&c(Rank::Three, Suit::Hearts)));
        assert!(!game.card_pool().contains(&hole));
        assert_eq!(state.remaining_cards.len(), game.card_pool().len() + 1);
    }

    #[test]
    fn non_terminal_hit_reports_only_revealed_dealer_value() {
        let mut game = Game::new(DealerPolicy::Greedy, Some(3));
        game.next_round_stacked(&[
            c(Rank::Two, Suit::Spades),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Four, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Three, Suit::Clubs),
        ])
        .unwrap();
        let round = game.hit().unwrap();
        assert_eq!(round, RoundState::in_progress(9, 9));
    }
}
