use preflop_advisor::cards::{Card, StartingHand};
use preflop_advisor::decision::{Action, Decision, analyze, make_decision};
use preflop_advisor::position::Position;

fn hand(first: &str, second: &str) -> StartingHand {
    let first: Card = first.parse().expect("valid card");
    let second: Card = second.parse().expect("valid card");
    StartingHand::new(first, second)
}

fn decide(hand: &StartingHand, position: &str, stack_bb: u32, actions: &[&str]) -> Decision {
    make_decision(hand, &Position::parse(position), stack_bb, 6, actions)
}

fn outcome(decision: &Decision) -> (Action, u32, u8) {
    (decision.action, decision.amount, decision.confidence)
}

#[test]
fn premium_opens_with_callers_added_to_size() {
    let aces = hand("AS", "AH");
    let decision = decide(&aces, "UTG", 100, &["CALL", "CALL"]);
    assert_eq!(outcome(&decision), (Action::Raise, 5, 90));

    let short = decide(&aces, "UTG", 2, &["CALL", "CALL"]);
    assert_eq!(outcome(&short), (Action::Raise, 2, 90));
}

#[test]
fn premium_calls_light_aggression_and_reraises_heavy() {
    let ak = hand("AS", "KH");
    assert_eq!(
        outcome(&decide(&ak, "MP", 100, &["RAISE-6"])),
        (Action::Call, 0, 85)
    );
    assert_eq!(
        outcome(&decide(&ak, "MP", 100, &["RAISE-6", "RAISE-4"])),
        (Action::Raise, 15, 80)
    );
    assert_eq!(
        outcome(&decide(&ak, "MP", 12, &["RAISE-6", "RAISE-4"])),
        (Action::Raise, 12, 80)
    );
    // Fractional sizes are truncated: 3 * 1.5 = 4.5.
    assert_eq!(
        outcome(&decide(&ak, "MP", 100, &["RAISE-1", "RAISE-2"])),
        (Action::Raise, 4, 80)
    );
}

#[test]
fn premium_reraise_against_a_huge_bet_is_capped_at_the_stack() {
    let aces = hand("AS", "AH");
    assert_eq!(
        outcome(&decide(&aces, "BTN", 100, &["RAISE-99999999999999999999", "RAISE"])),
        (Action::Raise, 100, 80)
    );
}

#[test]
fn seat_rules_follow_the_label_even_for_hand_built_positions() {
    let kq = hand("KH", "QD");
    let built = Position::Other("BTN".to_string());
    let decision = make_decision(&kq, &built, 100, 6, &[] as &[&str]);
    assert_eq!(outcome(&decision), (Action::Raise, 3, 70));

    let j2 = hand("JD", "2S");
    let cutoff = Position::Other("CO".to_string());
    let decision = make_decision(&j2, &cutoff, 100, 6, &[] as &[&str]);
    assert_eq!(outcome(&decision), (Action::Raise, 3, 60));
}

#[test]
fn strong_open_size_grows_with_callers() {
    let aq = hand("AS", "QS");
    assert_eq!(outcome(&decide(&aq, "CO", 100, &[])), (Action::Raise, 2, 80));
    assert_eq!(
        outcome(&decide(&aq, "CO", 100, &["CALL"])),
        (Action::Raise, 3, 80)
    );
    assert_eq!(
        outcome(&decide(&aq, "CO", 100, &["CALL", "CALL"])),
        (Action::Raise, 3, 80)
    );
    assert_eq!(
        outcome(&decide(&aq, "CO", 100, &["CALL", "CALL", "CALL"])),
        (Action::Raise, 4, 80)
    );
    assert_eq!(
        outcome(&decide(&aq, "CO", 1, &["CALL", "CALL", "CALL"])),
        (Action::Raise, 1, 80)
    );
}

#[test]
fn strong_facing_raises() {
    let nines = hand("9S", "9D");
    assert_eq!(
        outcome(&decide(&nines, "SB", 100, &["RAISE-3"])),
        (Action::Call, 0, 75)
    );
    assert_eq!(
        outcome(&decide(&nines, "SB", 100, &["RAISE-3", "RAISE-9"])),
        (Action::Fold, 0, 70)
    );
    assert_eq!(
        outcome(&decide(&nines, "SB", 40, &["RAISE-3", "RAISE-9"])),
        (Action::Fold, 0, 50)
    );
}

#[test]
fn good_hands_open_only_on_the_button() {
    let kq = hand("KH", "QD");
    assert_eq!(outcome(&decide(&kq, "BTN", 100, &[])), (Action::Raise, 3, 70));
    assert_eq!(outcome(&decide(&kq, "BTN", 2, &[])), (Action::Raise, 2, 70));
    assert_eq!(outcome(&decide(&kq, "CO", 100, &[])), (Action::Call, 0, 65));
    assert_eq!(
        outcome(&decide(&kq, "BTN", 100, &["RAISE-3", "FOLD"])),
        (Action::Call, 0, 65)
    );
    assert_eq!(
        outcome(&decide(&kq, "BTN", 100, &["RAISE-3"])),
        (Action::Fold, 0, 50)
    );
}

#[test]
fn marginal_hands_steal_late_or_take_a_cheap_price() {
    let j2 = hand("JD", "2S");
    assert_eq!(outcome(&decide(&j2, "CO", 100, &[])), (Action::Raise, 3, 60));
    assert_eq!(outcome(&decide(&j2, "BTN", 100, &["CALL"])), (Action::Raise, 3, 60));
    assert_eq!(outcome(&decide(&j2, "UTG", 100, &[])), (Action::Fold, 0, 50));

    // One raise of 10 offset by four folds leaves aggression at zero.
    let quiet_raise = ["RAISE-10", "FOLD", "FOLD", "FOLD", "FOLD"];
    assert_eq!(
        outcome(&decide(&j2, "UTG", 100, &quiet_raise)),
        (Action::Call, 0, 55)
    );
    assert_eq!(
        outcome(&decide(&j2, "UTG", 30, &quiet_raise)),
        (Action::Fold, 0, 50)
    );
}

#[test]
fn weak_and_trash_always_fold() {
    let weak = hand("9C", "3D");
    let trash = hand("7S", "2H");
    let spots: [(&str, &[&str]); 4] = [
        ("BTN", &[]),
        ("CO", &["CALL", "CALL"]),
        ("BB", &["RAISE-4"]),
        ("DEALER", &["FOLD", "FOLD"]),
    ];

    for hand in [weak, trash] {
        for (position, actions) in spots {
            let decision = decide(&hand, position, 100, actions);
            assert_eq!(outcome(&decision), (Action::Fold, 0, 50), "{hand} {position}");
        }
    }
}

#[test]
fn unknown_position_only_changes_the_displayed_win_rate() {
    let kq = hand("KH", "QD");
    let position = Position::parse("btn");
    assert!(!position.is_known());

    let analysis = analyze(&kq, &position, 100, 6, &[] as &[&str]);
    assert_eq!(
        outcome(&analysis.decision),
        outcome(&decide(&kq, "UTG", 100, &[]))
    );
    assert!((analysis.adjusted_win_rate - 48.0).abs() < 1e-9);
    assert!(analysis.decision.reasoning.contains("(48.0% win rate)"));
    assert!(analysis.decision.reasoning.contains("Position: btn"));
}

#[test]
fn pot_odds_fall_back_to_one_without_bets() {
    let ak = hand("AD", "KD");
    let none = analyze(&ak, &Position::Bb, 50, 6, &["CALL"]);
    assert_eq!(none.pot_odds, 1.0);

    let some = analyze(&ak, &Position::Bb, 50, 6, &["RAISE-20"]);
    assert_eq!(some.pot_odds, 2.5);
}

#[test]
fn player_count_does_not_change_the_decision() {
    let aq = hand("AH", "QC");
    let heads_up = make_decision(&aq, &Position::Co, 100, 2, &["CALL"]);
    let full_ring = make_decision(&aq, &Position::Co, 100, 9, &["CALL"]);
    assert_eq!(heads_up, full_ring);
}

#[test]
fn repeated_calls_are_identical() {
    let ak = hand("AS", "KS");
    let actions = ["CALL", "RAISE-4", "FOLD"];
    let first = decide(&ak, "BTN", 60, &actions);
    let second = decide(&ak, "BTN", 60, &actions);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn reasoning_summarises_the_spot() {
    let ak = hand("KS", "AS");
    let decision = decide(&ak, "BTN", 100, &["CALL", "RAISE-4", "FOLD"]);
    assert_eq!(outcome(&decision), (Action::Call, 0, 85));
    insta::assert_snapshot!(decision.reasoning, @r"
    Hand strength: PREMIUM (90.2% win rate)
    Position: BTN
    Opponents: 1 callers, 1 raisers
    Aggression level: 1.5
    ");
}

#[test]
fn aggression_shows_a_decimal_once_folds_are_involved() {
    let trash = hand("7S", "2H");
    let line = |actions: &[&str]| {
        decide(&trash, "BB", 100, actions)
            .reasoning
            .lines()
            .last()
            .unwrap_or_default()
            .to_string()
    };

    assert_eq!(line(&[]), "Aggression level: 0");
    assert_eq!(line(&["RAISE-3", "RAISE-9"]), "Aggression level: 4");
    assert_eq!(line(&["FOLD", "FOLD"]), "Aggression level: -1.0");
    assert_eq!(
        line(&["RAISE-3", "FOLD", "FOLD", "FOLD", "FOLD"]),
        "Aggression level: 0.0"
    );
    assert_eq!(line(&["CALL", "FOLD"]), "Aggression level: -0.5");
}

#[test]
fn decisions_serialize_with_upper_case_actions() {
    let aces = hand("AS", "AH");
    let decision = decide(&aces, "UTG", 100, &[]);
    let value = serde_json::to_value(&decision).expect("serialize");
    assert_eq!(value["action"], "RAISE");
    assert_eq!(value["amount"], 3);
    assert_eq!(value["confidence"], 90);
}
