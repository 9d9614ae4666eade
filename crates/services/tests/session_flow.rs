use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{ActivityError, AnswerOutcome, Session, SessionError};
use vocab_core::content::ContentLibrary;
use vocab_core::model::ActivityKind;
use vocab_core::time::fixed_clock;

fn build_session(seed: u64) -> Session {
    let library = ContentLibrary::builtin().unwrap();
    let mut session = Session::with_rng(library, fixed_clock(), StdRng::seed_from_u64(seed));
    session.enter_name("Mina").unwrap();
    session
}

fn complete_syllables(session: &mut Session) {
    while !session.syllables().is_complete() {
        let split = session.syllables().current_item().unwrap().parts().to_vec();
        let game = session.syllables_mut().unwrap();
        assert_eq!(game.submit_split(&split).unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

fn complete_word_builder(session: &mut Session) {
    while !session.word_builder().is_complete() {
        let parts = session
            .word_builder()
            .current_item()
            .unwrap()
            .parts()
            .to_vec();
        let game = session.word_builder_mut().unwrap();
        for part in &parts {
            game.append_tile(part).unwrap();
        }
        assert_eq!(game.submit_build().unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

fn complete_sentences(session: &mut Session) {
    while !session.sentences().is_complete() {
        let correct = session
            .sentences()
            .current_item()
            .unwrap()
            .correct_option()
            .to_owned();
        let game = session.sentences_mut().unwrap();
        assert_eq!(game.submit_option(&correct).unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

fn complete_antonyms(session: &mut Session) {
    while !session.antonyms().is_complete() {
        let answer = session
            .antonyms()
            .current_item()
            .unwrap()
            .answer()
            .to_owned();
        let game = session.antonyms_mut().unwrap();
        assert_eq!(game.submit_choice(&answer).unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

fn complete_yes_no(session: &mut Session) {
    while !session.yes_no().is_complete() {
        let answer = session.yes_no().current_item().unwrap().answer();
        let game = session.yes_no_mut().unwrap();
        assert_eq!(game.submit_answer(answer).unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

fn complete_current_story(session: &mut Session) {
    let game = session.reading_mut().unwrap();
    game.mark_story_read();
    while !game.is_complete() {
        let answer = game.current_question().unwrap().correct_answer().to_owned();
        assert_eq!(game.submit_answer(&answer).unwrap(), AnswerOutcome::Correct);
        assert!(game.advance());
    }
}

#[test]
fn games_stay_locked_until_sign_in() {
    let library = ContentLibrary::builtin().unwrap();
    let mut session = Session::with_rng(library, fixed_clock(), StdRng::seed_from_u64(1));

    assert_eq!(
        session.syllables_mut().unwrap_err(),
        SessionError::NameRequired
    );
    assert_eq!(
        session.reading_mut().unwrap_err(),
        SessionError::NameRequired
    );

    // Looking is always allowed, playing is not.
    assert_eq!(session.syllables().items().len(), 7);

    session.enter_name("Mina").unwrap();
    assert!(session.syllables_mut().is_ok());
}

#[test]
fn a_full_session_plays_through_every_game() {
    let mut session = build_session(7);

    complete_syllables(&mut session);
    complete_word_builder(&mut session);
    complete_sentences(&mut session);
    complete_antonyms(&mut session);
    complete_yes_no(&mut session);
    complete_current_story(&mut session);

    for kind in ActivityKind::ALL {
        let progress = session.progress(kind);
        assert!(progress.is_complete, "{kind} should be complete");
        assert_eq!(progress.remaining, 0);
    }
    // Exercise games drew 7 items each; the story quiz carries 3 questions.
    assert_eq!(session.progress(ActivityKind::Syllables).total, 7);
    assert_eq!(session.progress(ActivityKind::Reading).total, 3);
}

#[test]
fn wrong_answers_leave_every_cursor_in_place() {
    let mut session = build_session(13);

    let split = session.syllables().current_item().unwrap().parts().to_vec();
    let mut reversed = split.clone();
    reversed.reverse();
    let game = session.syllables_mut().unwrap();
    assert_eq!(game.submit_split(&reversed).unwrap(), AnswerOutcome::Incorrect);
    assert!(!game.advance());

    let wrong_option = {
        let item = session.sentences().current_item().unwrap();
        let correct = item.correct_option();
        item.options()
            .iter()
            .find(|option| option.as_str() != correct)
            .cloned()
            .unwrap()
    };
    let game = session.sentences_mut().unwrap();
    assert_eq!(
        game.submit_option(&wrong_option).unwrap(),
        AnswerOutcome::Incorrect
    );
    assert!(!game.advance());

    let answer = session.yes_no().current_item().unwrap().answer();
    let game = session.yes_no_mut().unwrap();
    assert_eq!(game.submit_answer(!answer).unwrap(), AnswerOutcome::Incorrect);
    assert!(!game.advance());

    for kind in ActivityKind::ALL {
        assert_eq!(session.progress(kind).completed, 0);
    }
}

#[test]
fn retry_after_a_wrong_answer_still_wins_the_item() {
    let mut session = build_session(29);

    let split = session.syllables().current_item().unwrap().parts().to_vec();
    let mut reversed = split.clone();
    reversed.reverse();

    let game = session.syllables_mut().unwrap();
    game.submit_split(&reversed).unwrap();
    assert_eq!(game.submit_split(&split).unwrap(), AnswerOutcome::Correct);
    assert!(game.advance());
    assert_eq!(session.progress(ActivityKind::Syllables).completed, 1);
}

#[test]
fn antonym_bank_always_offers_the_answer_once() {
    let mut session = build_session(3);

    while !session.antonyms().is_complete() {
        let answer = session
            .antonyms()
            .current_item()
            .unwrap()
            .answer()
            .to_owned();
        let hits = session
            .antonyms()
            .options()
            .iter()
            .filter(|option| **option == answer)
            .count();
        assert_eq!(hits, 1);

        let game = session.antonyms_mut().unwrap();
        game.submit_choice(&answer).unwrap();
        game.advance();
    }
}

#[test]
fn reading_shelf_wraps_back_to_the_first_story() {
    let mut session = build_session(5);
    let shelf_len = session.reading().stories().len();
    assert_eq!(shelf_len, 3);

    complete_current_story(&mut session);
    let first_title = session.reading().current_story().unwrap().title().to_owned();

    // Walk the whole shelf; after the last story we are home again.
    for _ in 0..shelf_len {
        session.reading_mut().unwrap().next_story();
    }
    assert_eq!(session.reading().story_cursor(), 0);
    assert_eq!(
        session.reading().current_story().unwrap().title(),
        first_title
    );
    // The lap home does not bring the old quiz state back.
    assert!(!session.reading().story_read());
    assert_eq!(
        session.reading_mut().unwrap().submit_answer("Favorable"),
        Err(ActivityError::StoryNotRead)
    );
}

#[test]
fn reset_wipes_progress_and_keeps_the_student() {
    let mut session = build_session(17);

    complete_syllables(&mut session);
    complete_yes_no(&mut session);
    complete_current_story(&mut session);
    assert!(session.progress(ActivityKind::Syllables).is_complete);

    session.reset_session();

    for kind in ActivityKind::ALL {
        let progress = session.progress(kind);
        assert_eq!(progress.completed, 0, "{kind} should be back to zero");
        assert!(!progress.is_complete || progress.total == 0);
    }
    assert_eq!(session.student_name(), Some("Mina"));
    assert!(!session.reading().story_read());

    // The fresh session is immediately playable.
    complete_syllables(&mut session);
    assert!(session.progress(ActivityKind::Syllables).is_complete);
}
