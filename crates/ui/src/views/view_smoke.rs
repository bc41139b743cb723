use survey_core::SessionState;
use survey_core::model::{AnswerValue, QuestionId, ScaleValue};

use super::test_harness::{ViewKind, setup_view_harness};

fn answered_state() -> SessionState {
    let mut state = SessionState::new();
    state.set_user_email("ana@uni.cl");
    state.set_answer(
        QuestionId::new("s1_causa"),
        AnswerValue::text("Falta de memoria en el runner"),
    );
    let four = ScaleValue::new(4).expect("in range");
    state.set_answer(QuestionId::new("s1_confianza"), AnswerValue::Scale(four));
    state
}

#[tokio::test(flavor = "current_thread")]
async fn consent_view_smoke_disables_button_without_email() {
    let mut harness = setup_view_harness(ViewKind::Consent, SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Acepto y Continuar"), "missing button in {html}");
    assert!(html.contains("disabled"), "button should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn consent_view_smoke_keeps_typed_email() {
    let mut state = SessionState::new();
    state.set_user_email("ana@uni.cl");
    let mut harness = setup_view_harness(ViewKind::Consent, state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("ana@uni.cl"), "missing email in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn step_view_smoke_renders_first_scenario() {
    let mut harness = setup_view_harness(ViewKind::Step(0), SessionState::new());
    harness.rebuild();
    let html = harness.render();

    let scenario = harness.survey.scenario(0).expect("first scenario");
    assert!(html.contains(&scenario.title), "missing title in {html}");
    assert!(html.contains("Escenario 1 de 3"), "missing progress in {html}");
    assert!(
        html.contains("/run-visualizer-survey/img/scenario-timeout.png"),
        "media not resolved against base path in {html}"
    );
    assert!(html.contains("Siguiente"), "missing next label in {html}");

    let mut cursor = 0;
    for question in &scenario.questions {
        let found = html[cursor..]
            .find(&question.text)
            .unwrap_or_else(|| panic!("question {} out of order in {html}", question.id));
        cursor += found + question.text.len();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn step_view_smoke_last_scenario_offers_review() {
    let mut harness = setup_view_harness(ViewKind::Step(2), SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Finalizar y Revisar"), "missing review label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn step_view_smoke_out_of_range_shows_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Step(7), SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Cargando..."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_smoke_lists_every_question() {
    let mut harness = setup_view_harness(ViewKind::Summary, answered_state());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("ana@uni.cl"), "missing email in {html}");
    assert!(html.contains("1. Escenario 1"), "missing heading in {html}");
    assert!(html.contains("Falta de memoria en el runner"), "missing answer in {html}");
    assert!(html.contains("Sin respuesta"), "missing no-answer label in {html}");
    for question in harness.survey.questions() {
        assert!(html.contains(&question.text), "missing {} in {html}", question.id);
    }
    assert!(html.contains("Confirmar y Enviar Encuesta"), "missing submit in {html}");
    assert!(harness.transport.bodies.lock().expect("lock").is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn closing_view_smoke_shows_registered_email() {
    let mut harness = setup_view_harness(ViewKind::Closing, answered_state());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("¡Gracias!"), "missing heading in {html}");
    assert!(html.contains("ana@uni.cl"), "missing email in {html}");
    assert!(html.contains("Sí, me interesa"), "missing opt-in in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_smoke_offers_way_back() {
    let segments = vec!["survey".to_string(), "two".to_string()];
    let mut harness = setup_view_harness(ViewKind::NotFound(segments), SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Página no encontrada"), "missing message in {html}");
    assert!(html.contains("Volver al inicio"), "missing link in {html}");
}
