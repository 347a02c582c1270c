use super::*;

const NOT_ENOUGH: &str = "Please upload at least 10 images before starting the training.";

fn images(count: usize) -> Vec<ImageAsset> {
    (0..count)
        .map(|idx| ImageAsset::new(format!("img{idx}.jpg"), vec![0xFF, 0xD8, idx as u8]))
        .collect()
}

fn session_with(count: usize) -> TrainingSession {
    let mut session = TrainingSession::default();
    session.add_files(images(count));
    session
}

fn started(session: &mut TrainingSession) -> TrainingRequest {
    match session.start_training() {
        StartOutcome::Started(request) => request,
        other => panic!("expected a started run, got {other:?}"),
    }
}

#[test]
fn nine_images_are_rejected_with_exact_message() {
    let mut session = session_with(9);
    assert!(!session.can_start());

    let outcome = session.start_training();

    assert!(matches!(
        outcome,
        StartOutcome::Rejected(StartRejection::NotEnoughImages {
            have: 9,
            required: 10
        })
    ));
    assert!(!session.is_training());
    assert_eq!(session.error(), Some(NOT_ENOUGH));
    assert_eq!(session.training().phase(), TrainingPhase::Failed);
}

#[test]
fn empty_session_is_rejected_too() {
    let mut session = TrainingSession::default();
    assert!(matches!(
        session.start_training(),
        StartOutcome::Rejected(_)
    ));
    assert_eq!(session.error(), Some(NOT_ENOUGH));
}

#[test]
fn twelve_images_run_through_every_progress_value() {
    let mut session = session_with(12);
    assert!(session.can_start());

    let request = started(&mut session);
    assert!(session.is_training());
    assert_eq!(session.progress(), 0);
    assert_eq!(request.image_count, 12);
    assert_eq!(request.options, SessionOptions::default());

    let mut seen = Vec::new();
    for value in 0..=MAX_PROGRESS {
        assert!(session.apply_progress(request.run_id, value));
        seen.push(session.progress());
    }
    assert_eq!(seen, (0..=100).collect::<Vec<u8>>());

    let completion = session.complete_training(request.run_id).unwrap();
    assert_eq!(completion.image_count, 12);
    assert!(!session.is_training());
    assert_eq!(session.progress(), 100);
    assert_eq!(session.error(), None);
    assert_eq!(session.training().phase(), TrainingPhase::Completed);
}

#[test]
fn start_while_running_changes_nothing() {
    let mut session = session_with(10);
    let request = started(&mut session);
    session.apply_progress(request.run_id, 40);

    assert_eq!(session.start_training(), StartOutcome::AlreadyRunning);
    assert!(!session.can_start());
    assert_eq!(session.progress(), 40);
    assert_eq!(session.training().run_id(), request.run_id);
}

#[test]
fn successful_start_clears_previous_error() {
    let mut session = session_with(9);
    session.start_training();
    assert!(session.error().is_some());

    session.add_files(images(1));
    started(&mut session);
    assert_eq!(session.error(), None);
    assert!(session.is_training());
}

#[test]
fn each_run_restarts_progress_at_zero() {
    let mut session = session_with(10);
    let first = started(&mut session);
    session.apply_progress(first.run_id, 100);
    session.complete_training(first.run_id);

    let second = started(&mut session);
    assert_ne!(first.run_id, second.run_id);
    assert_eq!(session.progress(), 0);
    assert!(session.is_training());
}

#[test]
fn messages_from_an_old_run_are_ignored() {
    let mut session = session_with(10);
    let first = started(&mut session);
    session.fail_training(first.run_id);
    let second = started(&mut session);

    assert!(!session.apply_progress(first.run_id, 90));
    assert!(session.complete_training(first.run_id).is_none());
    assert!(!session.fail_training(first.run_id));
    assert_eq!(session.progress(), 0);
    assert!(session.is_training());
    assert_eq!(session.training().run_id(), second.run_id);
}

#[test]
fn progress_never_moves_backwards_or_past_one_hundred() {
    let mut session = session_with(10);
    let request = started(&mut session);
    session.apply_progress(request.run_id, 30);
    session.apply_progress(request.run_id, 10);
    assert_eq!(session.progress(), 30);
    session.apply_progress(request.run_id, 250);
    assert_eq!(session.progress(), 100);
}

#[test]
fn failed_run_sets_generic_message_and_rearms() {
    let mut session = session_with(15);
    let request = started(&mut session);
    session.apply_progress(request.run_id, 12);

    assert!(session.fail_training(request.run_id));
    assert!(!session.is_training());
    assert_eq!(
        session.error(),
        Some("An error occurred during training. Please try again.")
    );
    assert!(session.can_start());
    assert!(matches!(session.start_training(), StartOutcome::Started(_)));
}

#[test]
fn progress_is_ignored_when_idle() {
    let mut session = session_with(10);
    assert!(!session.apply_progress(RunId(0), 5));
    assert!(session.complete_training(RunId(0)).is_none());
    assert_eq!(session.progress(), 0);
}

#[test]
fn options_are_replaced_unconditionally() {
    let mut session = TrainingSession::default();
    session.set_purpose(Purpose::Professional);
    session.set_gender(Gender::Male);
    session.set_gender(Gender::Male);
    assert_eq!(session.purpose(), Purpose::Professional);
    assert_eq!(session.gender(), Gender::Male);

    session.add_files(images(10));
    let request = started(&mut session);
    assert_eq!(
        request.options,
        SessionOptions {
            purpose: Purpose::Professional,
            gender: Gender::Male
        }
    );
}

#[test]
fn twenty_five_images_in_one_batch_keep_first_twenty() {
    let mut session = TrainingSession::default();
    let batch = images(25);
    let expected: Vec<String> = batch[..20]
        .iter()
        .map(|asset| asset.file_name().to_string())
        .collect();

    let outcome = session.add_files(batch);

    assert_eq!(outcome.added, 20);
    assert_eq!(outcome.dropped, 5);
    let kept: Vec<String> = session
        .images()
        .iter()
        .map(|asset| asset.file_name().to_string())
        .collect();
    assert_eq!(kept, expected);
}

#[test]
fn removing_below_minimum_disables_start() {
    let mut session = session_with(10);
    assert!(session.can_start());
    let removed = session.remove_file(3).unwrap();
    assert_eq!(removed.file_name(), "img3.jpg");
    assert_eq!(session.image_count(), 9);
    assert!(!session.can_start());
    assert!(session.remove_file(9).is_none());
}

#[test]
fn custom_limits_drive_gate_and_message() {
    let mut session = TrainingSession::new(&UploadSettings {
        max_images: 4,
        min_images: 3,
        max_file_size_bytes: 1024,
    });
    session.add_files(images(2));
    session.start_training();
    assert_eq!(
        session.error(),
        Some("Please upload at least 3 images before starting the training.")
    );
    session.add_files(images(5));
    assert_eq!(session.image_count(), 4);
    assert!(session.can_start());
}

#[test]
fn oversized_config_limit_still_builds_a_session() {
    let mut settings = crate::settings::AppSettings::default();
    settings.uploads.max_images = usize::MAX / 2;
    let settings = settings.normalized();
    let mut session = TrainingSession::new(&settings.uploads);
    session.add_files(images(12));
    assert_eq!(session.image_count(), 12);
    assert!(session.can_start());
}
