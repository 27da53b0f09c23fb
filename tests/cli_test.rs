use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::player::InputError;
use seabattle::{
    AiPlayer, Board, CliPlayer, ConsoleObserver, Coordinate, Game, GameObserver, Player,
    ShotError, ShotResult, Side,
};

fn output_of<I: std::io::BufRead>(player: CliPlayer<I, Vec<u8>>) -> String {
    let (_, out) = player.into_inner();
    String::from_utf8(out).expect("non utf8 output")
}

#[test]
fn test_reprompts_until_two_numbers() {
    let input = Cursor::new("hello\n4\n1 x\n2 3\n");
    let mut player = CliPlayer::new(input, Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    let target = player.select_target(&mut rng, &Board::new(true)).unwrap();
    assert_eq!(target, Coordinate::new(2, 1));

    let out = output_of(player);
    assert_eq!(out.matches("Enter coordinates").count(), 4);
    assert!(out.contains("Enter exactly two numbers, got 1"));
    assert!(out.contains("'x' is not a number"));
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut player = CliPlayer::new(Cursor::new("7\n"), Vec::new());
    let mut rng = SmallRng::seed_from_u64(1);
    let err = player
        .select_target(&mut rng, &Board::new(true))
        .unwrap_err();
    assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::Closed));
}

#[test]
fn test_console_observer_messages() {
    let mut observer = ConsoleObserver::new(Vec::new());
    observer.turn(Side::Human);
    observer.shot(Side::Human, Coordinate::new(0, 0), ShotResult::Hit { sunk: true });
    observer.rejected(
        Side::Human,
        ShotError::AlreadyTargeted(Coordinate::new(0, 0)),
    );
    observer.shot(Side::Automated, Coordinate::new(2, 1), ShotResult::Miss);
    observer.winner(Side::Automated);

    let out = String::from_utf8(observer.into_inner()).unwrap();
    assert!(out.contains("Your turn"));
    assert!(out.contains("You shot at 1 1: hit and sunk!"));
    assert!(out.contains("Cell 1 1 was already shot at, try again"));
    assert!(out.contains("Computer shot at 2 3: miss"));
    assert!(out.contains("The computer wins!"));
}

#[test]
fn test_full_game_from_scripted_input() {
    // Every cell once: the human can always finish the computer's fleet.
    let mut script = String::new();
    for row in 1..=6 {
        for col in 1..=6 {
            script.push_str(&format!("{} {}\n", row, col));
        }
    }
    let human = CliPlayer::new(Cursor::new(script), std::io::sink());
    let mut game = Game::new(
        Box::new(human),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(2024),
    );
    let mut observer = ConsoleObserver::new(Vec::new());
    observer.greet();
    let winner = game.run(&mut observer).unwrap();

    let out = String::from_utf8(observer.into_inner()).unwrap();
    assert!(out.starts_with("Sea battle!"));
    assert!(out.contains("Your board:"));
    assert!(out.contains("Computer's board:"));
    match winner {
        Side::Human => assert!(out.ends_with("You win!\n")),
        Side::Automated => assert!(out.ends_with("The computer wins!\n")),
    }
}
