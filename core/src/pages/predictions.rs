use crate::router::{Page, RenderContext};
use crate::view::{Block, PageView};

pub(super) fn render(ctx: &RenderContext) -> PageView {
    let view = PageView::new(Page::PatientPredictions, "🤖", "Patient Predictions")
        .text("Enter patient details to get predictions (to be connected with backend later).")
        .subheader("Patient Information")
        .push(Block::Form(ctx.form.clone()));

    match &ctx.acknowledgement {
        Some(ack) => view.push(Block::Success(ack.message().to_string())),
        None => view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Acknowledgement, Age, PatientForm, PendingBackend, Predictor};

    #[test]
    fn test_form_rendered_with_values() {
        let ctx = RenderContext {
            form: PatientForm {
                age: Age::clamped(200),
                ..PatientForm::default()
            },
            acknowledgement: None,
        };
        let view = render(&ctx);
        let form = view.blocks.iter().find_map(|b| match b {
            Block::Form(f) => Some(f),
            _ => None,
        });
        assert_eq!(form.map(|f| f.age.value()), Some(120));
        assert!(!view.blocks.iter().any(|b| matches!(b, Block::Success(_))));
    }

    #[test]
    fn test_acknowledgement_after_submit() {
        let form = PatientForm {
            diagnosis: "Sepsis".into(),
            ..PatientForm::default()
        };
        let ack = PendingBackend.predict(&form);
        let view = render(&RenderContext {
            form,
            acknowledgement: Some(ack),
        });
        assert_eq!(
            view.blocks.last(),
            Some(&Block::Success(
                Acknowledgement::BackendPending.message().to_string()
            ))
        );
    }
}
