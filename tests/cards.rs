//! Card, deck and hand tests.

use bjround::{Card, DECK_SIZE, Deck, Hand, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

#[test]
fn card_exposes_rank_and_suit() {
    let jack = card(Rank::Jack, Suit::Clubs);
    assert_eq!(jack.rank_value(), Rank::Jack);
    assert_eq!(jack.suit(), Suit::Clubs);
}

#[test]
fn ace_counts_eleven_high_and_one_low() {
    let ace = card(Rank::Ace, Suit::Spades);
    assert_eq!(ace.high_value(), 11);
    assert_eq!(ace.low_value(), 1);
}

#[test]
fn other_cards_have_a_single_value() {
    for rank in [Rank::Jack, Rank::Queen, Rank::King] {
        let face = card(rank, Suit::Spades);
        assert_eq!(face.low_value(), 10);
        assert_eq!(face.high_value(), face.low_value());
    }

    let five = card(Rank::Five, Suit::Diamonds);
    assert_eq!(five.low_value(), 5);
    assert_eq!(five.high_value(), 5);
    assert_eq!(card(Rank::Ten, Suit::Hearts).low_value(), 10);
    assert_eq!(card(Rank::Two, Suit::Hearts).high_value(), 2);
}

#[test]
fn cards_compare_by_rank_and_suit() {
    assert_eq!(card(Rank::Eight, Suit::Clubs), card(Rank::Eight, Suit::Clubs));
    assert_ne!(card(Rank::Nine, Suit::Clubs), card(Rank::Eight, Suit::Clubs));
    assert_ne!(card(Rank::Eight, Suit::Diamonds), card(Rank::Eight, Suit::Clubs));
}

#[test]
fn card_display_uses_suit_glyphs() {
    assert_eq!(card(Rank::Three, Suit::Spades).to_string(), "3\u{2660}");
    assert_eq!(card(Rank::Three, Suit::Hearts).to_string(), "3\u{2665}");
    assert_eq!(card(Rank::Three, Suit::Diamonds).to_string(), "3\u{2666}");
    assert_eq!(card(Rank::Three, Suit::Clubs).to_string(), "3\u{2663}");
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "10\u{2663}");
    assert_eq!(card(Rank::Queen, Suit::Hearts).to_string(), "Q\u{2665}");
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "A\u{2660}");
}

#[test]
fn deck_is_built_ranks_outer_suits_inner() {
    let ranks = [Rank::Two, Rank::Three, Rank::Four];
    let suits = [Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    let deck = Deck::with_ranks_and_suits(&ranks, &suits);

    let mut expected = Vec::new();
    for rank in ranks {
        for suit in suits {
            expected.push(card(rank, suit));
        }
    }

    assert_eq!(deck.len(), 9);
    assert_eq!(deck.cards(), expected.as_slice());
}

#[test]
fn standard_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let count = deck.cards().iter().filter(|&&c| c == card(rank, suit)).count();
            assert_eq!(count, 1, "{rank} of {suit:?}");
        }
    }
    assert_eq!(deck.cards()[0], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(Rank::Ace, Suit::Spades));
}

#[test]
fn shuffle_changes_order_but_keeps_cards() {
    let mut deck = Deck::new();
    let initial = deck.cards().to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    deck.shuffle(&mut rng);

    assert_ne!(deck.cards(), initial.as_slice());
    assert_eq!(deck.len(), initial.len());
    for card in &initial {
        assert!(deck.cards().contains(card));
    }
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second);
}

#[test]
fn deals_cards_in_current_order() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    let order = deck.cards().to_vec();

    for (index, expected) in order.iter().enumerate() {
        assert_eq!(deck.draw_next(), Some(*expected));
        assert_eq!(deck.remaining(), order.len() - index - 1);
    }
}

#[test]
fn exhausted_deck_keeps_returning_none() {
    let mut deck = Deck::from_cards(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
    ]);

    assert_eq!(deck.draw_next(), Some(card(Rank::Two, Suit::Hearts)));
    assert_eq!(deck.draw_next(), Some(card(Rank::Ace, Suit::Clubs)));
    assert_eq!(deck.draw_next(), None);
    assert_eq!(deck.draw_next(), None);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn empty_deck_is_exhausted_immediately() {
    let mut deck = Deck::from_cards(Vec::new());
    assert!(deck.is_empty());
    assert_eq!(deck.draw_next(), None);
}

#[test]
fn hand_keeps_cards_in_deal_order() {
    let cards = [card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Spades)];
    let hand = hand_of(&cards);
    assert_eq!(hand.cards(), &cards);
    assert_eq!(hand.len(), 2);
    assert!(Hand::new().is_empty());
    assert_eq!(Hand::new().score(), 0);
}

#[test]
fn hand_scores_number_cards_at_face_value() {
    let hand = hand_of(&[card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Spades)]);
    assert_eq!(hand.score(), 5);
}

#[test]
fn hand_scores_ace_high_when_it_fits() {
    let hand = hand_of(&[card(Rank::Ace, Suit::Clubs), card(Rank::Six, Suit::Hearts)]);
    assert_eq!(hand.score(), 17);
}

#[test]
fn hand_scores_ace_low_to_avoid_busting() {
    let hand = hand_of(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    assert_eq!(hand.score(), 17);
    assert!(!hand.is_bust());
}

#[test]
fn hand_reports_unavoidable_bust_as_is() {
    let hand = hand_of(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(hand.score(), 30);
    assert!(hand.is_bust());
}

#[test]
fn hand_scores_one_ace_high_and_one_low() {
    let hand = hand_of(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
    ]);
    assert_eq!(hand.score(), 19);
}

#[test]
fn hand_resolves_aces_after_the_other_cards() {
    let hand = hand_of(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
    ]);
    assert_eq!(hand.score(), 16);

    let blackjack = hand_of(&[card(Rank::Ace, Suit::Spades), card(Rank::Queen, Suit::Hearts)]);
    assert_eq!(blackjack.score(), 21);

    let four_aces = hand_of(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Diamonds),
    ]);
    assert_eq!(four_aces.score(), 14);
}
