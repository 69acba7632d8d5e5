#![forbid(unsafe_code)]

//! Recording a walk and rebuilding it from its transcript.
//!
//! The exercise here is small but touches every suspension kind, so a
//! replayed transcript exercises the whole submission path: free input,
//! line predictions, a note, an expression check, and a pause.

use lockstep_core::script::{Script, ScriptBuilder};
use lockstep_core::source::SourceText;
use lockstep_core::step::WidgetKind;
use lockstep_core::value::Value;
use lockstep_engine::exercise::Exercise;
use lockstep_engine::policy::AttemptPolicy;
use lockstep_engine::record::Transcript;
use lockstep_engine::session::Session;
use lockstep_engine::suspension::{Answer, Verdict};
use lockstep_widgets::surface::Surface;

fn listing() -> SourceText {
    SourceText::new(
        "name = input(\"Name? \")\ncount = 3\ntotal = count * 2\nprint(total)",
    )
}

fn surface() -> Surface {
    let mut surface = Surface::new();
    surface.place(0, 0, WidgetKind::Code).unwrap();
    surface.place(5, 0, WidgetKind::Terminal).unwrap();
    surface.place(5, 30, WidgetKind::Frame).unwrap();
    surface
}

fn script() -> Script {
    let mut b = ScriptBuilder::new();
    b.jump(1).ask_input("Name? ").assign("name", "Ada");
    b.ask_line(2).assign("count", 3);
    b.note("count starts at three.");
    b.jump(3)
        .ask_expr(6, "What does count * 2 evaluate to?")
        .assign("total", 6);
    b.ask_line(4).pause().println("6");
    b.finish()
}

fn exercise() -> Exercise {
    Exercise::new(listing(), surface(), script()).unwrap()
}

fn full_walk() -> [Answer; 6] {
    [
        Answer::Text("Ada".into()),
        Answer::Line(2),
        Answer::Ack,
        Answer::Value(Value::Int(6)),
        Answer::Line(4),
        Answer::Ack,
    ]
}

#[test]
fn replay_rebuilds_a_finished_walk() {
    let mut original = Session::new(exercise(), AttemptPolicy::Strict);
    original.start().unwrap();
    // one wrong prediction along the way, so the record is not all clean
    original.submit(Answer::Text("Ada".into())).unwrap();
    original.submit(Answer::Line(3)).unwrap();
    for answer in &full_walk()[1..] {
        original.submit(answer.clone()).unwrap();
    }
    assert!(original.is_completed());
    assert_eq!(original.transcript().len(), 7);

    let replayed =
        Session::replay(exercise(), AttemptPolicy::Strict, original.transcript()).unwrap();
    assert_eq!(replayed, original);
    assert!(replayed.is_completed());
    assert_eq!(replayed.snapshot(), original.snapshot());
}

#[test]
fn replay_of_a_partial_walk_can_continue() {
    let mut original = Session::new(exercise(), AttemptPolicy::Strict);
    original.start().unwrap();
    original.submit(Answer::Text("Ada".into())).unwrap();
    original.submit(Answer::Line(3)).unwrap();
    original.submit(Answer::Line(2)).unwrap();
    assert!(original.is_suspended());

    // the learner walked away; a later session picks the walk back up
    let mut resumed =
        Session::replay(exercise(), AttemptPolicy::Strict, original.transcript()).unwrap();
    assert_eq!(resumed, original);
    assert!(resumed.is_suspended());
    assert_eq!(resumed.cursor(), original.cursor());
    assert_eq!(resumed.snapshot(), original.snapshot());

    for answer in [
        Answer::Ack,
        Answer::Value(Value::Int(6)),
        Answer::Line(4),
        Answer::Ack,
    ] {
        resumed.submit(answer).unwrap();
    }
    assert!(resumed.is_completed());
    assert_eq!(resumed.frame().get("total"), Some(&Value::Int(6)));
    assert_eq!(resumed.terminal().rendered(), "Name? Ada\n6\n");
}

#[test]
fn empty_transcript_replays_to_the_first_suspension() {
    let replayed =
        Session::replay(exercise(), AttemptPolicy::Strict, &Transcript::default()).unwrap();
    assert!(replayed.is_suspended());
    assert!(replayed.transcript().is_empty());
    // the walk stands at the input question, prompt already printed
    assert_eq!(replayed.terminal().rendered(), "Name? ");
    assert_eq!(replayed.code().current_line(), Some(1));
}

#[test]
fn replay_preserves_reveal_verdicts_under_the_same_policy() {
    let mut original = Session::new(exercise(), AttemptPolicy::RevealAfter(1));
    original.start().unwrap();
    original.submit(Answer::Text("Ada".into())).unwrap();
    // a single wrong prediction reveals immediately under this policy
    original.submit(Answer::Line(4)).unwrap();
    assert_eq!(original.last_verdict(), Some(Verdict::Revealed));

    let replayed =
        Session::replay(exercise(), AttemptPolicy::RevealAfter(1), original.transcript())
            .unwrap();
    assert_eq!(replayed, original);
    assert_eq!(replayed.transcript().summary().revealed, 1);
}

#[test]
fn summary_tallies_a_mixed_walk() {
    let mut session = Session::new(exercise(), AttemptPolicy::Strict);
    session.start().unwrap();
    session.submit(Answer::Text("Ada".into())).unwrap();
    session.submit(Answer::Line(3)).unwrap();
    session.submit(Answer::Line(3)).unwrap();
    session.submit(Answer::Line(2)).unwrap();
    session.submit(Answer::Ack).unwrap();

    let summary = session.transcript().summary();
    assert_eq!(summary.submissions, 5);
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.incorrect, 2);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.revealed, 0);
    assert_eq!(summary.resolved(), 3);
}

#[cfg(feature = "transcript")]
mod json {
    use super::*;

    #[test]
    fn transcript_round_trips_through_json() {
        let mut original = Session::new(exercise(), AttemptPolicy::Strict);
        original.start().unwrap();
        for answer in full_walk() {
            original.submit(answer).unwrap();
        }

        let json = original.transcript().to_json().unwrap();
        let restored = Transcript::from_json(&json).unwrap();
        assert_eq!(&restored, original.transcript());

        let replayed =
            Session::replay(exercise(), AttemptPolicy::Strict, &restored).unwrap();
        assert_eq!(replayed.snapshot(), original.snapshot());
        assert!(replayed.is_completed());
    }

    #[test]
    fn stored_json_names_the_verdicts() {
        let mut session = Session::new(exercise(), AttemptPolicy::Strict);
        session.start().unwrap();
        session.submit(Answer::Text("Ada".into())).unwrap();
        session.submit(Answer::Line(3)).unwrap();

        let json = session.transcript().to_json().unwrap();
        assert!(json.contains("\"Accepted\""));
        assert!(json.contains("\"Incorrect\""));
        assert!(json.contains("\"Ada\""));
    }
}
