//! Player and dealer behaviour tests.

use bjround::{
    Card, DEALER_HIT_LIMIT, Dealer, Decision, Event, HandView, PLAYER_PROMPT, Participant, Player,
    Rank, Role, ScriptedConsole, Slot, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn deal(participant: &mut dyn Participant, cards: &[Card]) {
    for &card in cards {
        participant.add_card(card);
    }
}

#[test]
fn participants_start_with_an_empty_hand() {
    assert!(Player::new().hand().is_empty());
    assert!(Dealer::new().hand().is_empty());
}

#[test]
fn participants_accept_cards() {
    let four = card(Rank::Four, Suit::Hearts);

    let mut player = Player::new();
    player.add_card(four);
    assert_eq!(player.cards(), &[four]);

    let mut dealer = Dealer::new();
    dealer.add_card(four);
    assert_eq!(dealer.cards(), &[four]);
    assert_eq!(dealer.score(), 4);
}

#[test]
fn input_is_hit_only_for_h_or_hit() {
    for line in ["h", "H", "hit", "HIT", "Hit", " hit \n", "h\r\n"] {
        assert_eq!(Decision::from_input(line), Decision::Hit, "{line:?}");
    }
    for line in ["s", "stay", "", "\n", "x", "hitt", "yes"] {
        assert_eq!(Decision::from_input(line), Decision::Stay, "{line:?}");
    }
}

#[test]
fn player_asks_the_console_each_turn() {
    let mut console = ScriptedConsole::with_lines(["hit", "nope"]);
    let mut player = Player::new();
    deal(&mut player, &[card(Rank::Three, Suit::Clubs), card(Rank::Five, Suit::Diamonds)]);

    assert_eq!(player.decide_turn(&mut console), Decision::Hit);
    assert_eq!(player.decide_turn(&mut console), Decision::Stay);
    assert_eq!(player.decide_turn(&mut console), Decision::Stay);

    assert_eq!(console.prompts(), &[PLAYER_PROMPT; 3]);
    assert_eq!(
        &console.events()[..2],
        &[
            Event::TurnStarted(Role::Player),
            Event::Hand(player.render_hand()),
        ]
    );
}

#[test]
fn dealer_hits_through_twelve_and_stays_above() {
    let mut console = ScriptedConsole::new();

    let mut dealer = Dealer::new();
    deal(&mut dealer, &[card(Rank::Ten, Suit::Clubs), card(Rank::Two, Suit::Hearts)]);
    assert_eq!(dealer.score(), DEALER_HIT_LIMIT);
    assert_eq!(dealer.decide_turn(&mut console), Decision::Hit);

    dealer.add_card(card(Rank::Ace, Suit::Spades));
    assert_eq!(dealer.score(), 13);
    assert_eq!(dealer.decide_turn(&mut console), Decision::Stay);

    assert!(console.prompts().is_empty());
}

#[test]
fn dealer_hit_limit_is_configurable() {
    let mut console = ScriptedConsole::new();
    let mut dealer = Dealer::with_hit_limit(16);
    deal(&mut dealer, &[card(Rank::Ten, Suit::Clubs), card(Rank::Six, Suit::Hearts)]);

    assert_eq!(dealer.hit_limit(), 16);
    assert_eq!(dealer.decide_turn(&mut console), Decision::Hit);
}

#[test]
fn player_shows_every_card_at_every_stage() {
    let cards = [card(Rank::Three, Suit::Clubs), card(Rank::Five, Suit::Diamonds)];
    let mut player = Player::new();
    deal(&mut player, &cards);

    let expected = HandView::revealed(Role::Player, &cards);
    assert_eq!(player.render_hand(), expected);
    assert_eq!(player.render_final_hand(), expected);
    assert_eq!(expected.hidden(), 0);
    assert_eq!(expected.to_string(), "Your Hand: 3\u{2663} 5\u{2666}");
}

#[test]
fn dealer_conceals_only_the_first_card_mid_round() {
    let cards = [
        card(Rank::Three, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::King, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
    ];

    for len in 1..=cards.len() {
        let mut dealer = Dealer::new();
        deal(&mut dealer, &cards[..len]);

        let view = dealer.render_hand();
        assert_eq!(view.slots.len(), len);
        assert_eq!(view.hidden(), 1);
        assert_eq!(view.slots[0], Slot::Hidden);
        for (slot, card) in view.slots.iter().zip(&cards[..len]).skip(1) {
            assert_eq!(*slot, Slot::Shown(*card));
        }
    }
}

#[test]
fn dealer_reveals_everything_at_the_end() {
    let cards = [card(Rank::Three, Suit::Clubs), card(Rank::Five, Suit::Diamonds)];
    let mut dealer = Dealer::new();
    deal(&mut dealer, &cards);

    assert_eq!(dealer.render_hand().to_string(), "Dealer: XX 5\u{2666}");
    assert_eq!(dealer.render_final_hand().hidden(), 0);
    assert_eq!(
        dealer.render_final_hand().to_string(),
        "Dealer: 3\u{2663} 5\u{2666}"
    );
}
