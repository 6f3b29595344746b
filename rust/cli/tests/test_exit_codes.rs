//! Exit codes and stream discipline of `run`: results on stdout, errors on
//! stderr, 0 on success and 2 on any failure.

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = blackjack_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_goes_to_stdout_with_zero() {
    let (code, out, err) = run(&["blackjack", "--help"]);
    assert_eq!(code, 0);
    assert!(err.is_empty());
    for command in ["play", "sim", "stats", "deal", "cfg", "rng"] {
        assert!(out.contains(command), "help should list {command}\n{out}");
    }
}

#[test]
fn unknown_command_prints_usage_with_two() {
    let (code, out, err) = run(&["blackjack", "split"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: blackjack <command> [options]"));
    assert!(err.contains("  sim"));
}

#[test]
fn missing_subcommand_is_an_error() {
    let (code, _, err) = run(&["blackjack"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn agent_play_succeeds() {
    let (code, out, err) = run(&[
        "blackjack", "play", "--agent", "baseline", "--rounds", "3", "--seed", "42",
    ]);
    assert_eq!(code, 0, "stderr: {err}");
    assert_eq!(out.matches("Result: ").count(), 3);
    assert!(out.contains("Session: played 3"));
}

#[test]
fn zero_rounds_returns_two() {
    let (code, _, err) = run(&["blackjack", "sim", "--rounds", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("rounds must be >= 1"));
}

#[test]
fn unknown_agent_returns_two() {
    let (code, out, err) = run(&["blackjack", "sim", "--rounds", "2", "--agent", "dqn"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Unknown agent type: dqn"));
}

#[test]
fn unknown_dealer_policy_returns_two() {
    let (code, _, err) = run(&[
        "blackjack", "play", "--agent", "random", "--dealer", "hit-soft-17",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("hit-soft-17"));
}

#[test]
fn missing_stats_input_returns_two() {
    let (code, out, err) = run(&["blackjack", "stats", "--input", "/nonexistent/rounds.jsonl"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Failed to read"));
}

#[test]
fn duplicate_stacked_cards_return_two() {
    let (code, _, err) = run(&["blackjack", "deal", "--cards", "KS,KS"]);
    assert_eq!(code, 2);
    assert!(err.contains("Card not available in pool"));
}
