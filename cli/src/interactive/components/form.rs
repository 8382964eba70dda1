//! Patient information form

use super::rgb_color;
use crate::output::text::pad_right;
use hms_core::form::{AdmissionType, Choice, FormField, Gender, PatientForm};
use hms_core::theme;
use iocraft::prelude::*;

const LABEL_WIDTH: usize = 16;

/// Display value of one field
pub fn field_value(form: &PatientForm, field: FormField) -> String {
    fn choices<C: Choice>(selected: C) -> String {
        C::ALL
            .iter()
            .map(|c| {
                if *c == selected {
                    format!("[{}]", c.label())
                } else {
                    format!(" {} ", c.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    match field {
        FormField::Age => format!("◂ {} ▸", form.age),
        FormField::Gender => choices::<Gender>(form.gender),
        FormField::AdmissionType => choices::<AdmissionType>(form.admission_type),
        FormField::Diagnosis => format!("{}▏", form.diagnosis),
        FormField::Predict => String::new(),
    }
}

#[derive(Default, Props)]
pub struct FormBlockProps {
    pub form: PatientForm,
    pub focus: Option<FormField>,
}

#[component]
pub fn FormBlock(props: &FormBlockProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let inputs = FormField::ALL
        .iter()
        .copied()
        .filter(|f| *f != FormField::Predict);
    let predict_focused = props.focus == Some(FormField::Predict);

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(inputs.map(|field| {
                let focused = props.focus == Some(field);
                let marker = if focused { "› " } else { "  " };
                element! {
                    View(key: field.label(), flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("{}{}", marker, pad_right(field.label(), LABEL_WIDTH)),
                            color: rgb_color(theme.label),
                            weight: if focused { Weight::Bold } else { Weight::Normal },
                        )
                        Text(
                            content: field_value(&props.form, field),
                            color: rgb_color(if focused { theme.button_hover } else { theme.label }),
                        )
                    }
                }
            }))
            View(
                margin_top: 1,
                padding_left: 2,
                padding_right: 2,
                background_color: rgb_color(if predict_focused { theme.button_hover } else { theme.button }),
            ) {
                Text(
                    content: "Predict",
                    color: rgb_color(theme.sidebar_text),
                    weight: Weight::Bold,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_core::form::Age;

    #[test]
    fn test_field_values() {
        let form = PatientForm {
            age: Age::clamped(30),
            gender: Gender::Female,
            admission_type: AdmissionType::Elective,
            diagnosis: "Flu".into(),
        };
        assert_eq!(field_value(&form, FormField::Age), "◂ 30 ▸");
        assert_eq!(
            field_value(&form, FormField::Gender),
            " Male  [Female]  Other "
        );
        assert_eq!(
            field_value(&form, FormField::AdmissionType),
            " Emergency  [Elective]  Urgent "
        );
        assert_eq!(field_value(&form, FormField::Diagnosis), "Flu▏");
    }
}
