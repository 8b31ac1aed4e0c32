#![cfg(not(target_arch = "wasm32"))]

use medcast_wasm::forms::is_valid_email;
use medcast_wasm::player::{Player, Tick, Toggle};

#[test]
fn clock_is_floored_and_zero_padded() {
    let mut player = Player::new();
    assert_eq!(player.clock(), "00:00 / 35:42");

    for _ in 0..65 {
        assert_eq!(player.tick(), Tick::Advanced);
    }
    assert_eq!(player.clock(), "01:05 / 35:42");
}

#[test]
fn finishing_rewinds_and_stops() {
    let mut player = Player::with_duration(3.0);
    player.play("ep-1");

    assert_eq!(player.tick(), Tick::Advanced);
    assert_eq!(player.tick(), Tick::Advanced);
    assert_eq!(player.tick(), Tick::Advanced);
    assert_eq!(player.position(), 3.0);

    assert_eq!(player.tick(), Tick::Finished);
    assert_eq!(player.position(), 0.0);
    assert!(!player.is_playing());
}

#[test]
fn toggling_the_playing_episode_pauses() {
    let mut player = Player::new();

    assert_eq!(player.toggle("ep-1"), Toggle::Started);
    assert!(player.is_playing());
    assert_eq!(player.episode(), Some("ep-1"));

    assert_eq!(player.toggle("ep-1"), Toggle::Paused);
    assert!(!player.is_playing());

    // A paused episode starts again rather than pausing twice.
    assert_eq!(player.toggle("ep-1"), Toggle::Started);
}

#[test]
fn switching_episodes_keeps_the_position() {
    let mut player = Player::new();
    player.toggle("ep-1");
    for _ in 0..30 {
        player.tick();
    }

    assert_eq!(player.toggle("ep-2"), Toggle::Started);
    assert_eq!(player.episode(), Some("ep-2"));
    assert_eq!(player.position(), 30.0);
}

#[test]
fn seek_jumps_to_the_fraction() {
    let mut player = Player::with_duration(200.0);
    player.seek(0.25);
    assert_eq!(player.position(), 50.0);
    assert_eq!(player.progress(), 0.25);
}

#[test]
fn email_validation_is_trim_then_at() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("   "));
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("  a@b.com  "));
}
