//! Table booking form with inline field errors.

use leptos::prelude::*;

use crate::state::booking::{BookingErrors, BookingField, BookingInput, submit_booking};
use crate::state::form_status::FormStatus;

struct FieldSpec {
    field: BookingField,
    label: &'static str,
    input_type: &'static str,
    min: Option<&'static str>,
    max: Option<&'static str>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { field: BookingField::Name, label: "Name", input_type: "text", min: None, max: None },
    FieldSpec { field: BookingField::Email, label: "Email", input_type: "email", min: None, max: None },
    FieldSpec { field: BookingField::Date, label: "Date", input_type: "date", min: None, max: None },
    FieldSpec { field: BookingField::Time, label: "Time", input_type: "time", min: None, max: None },
    FieldSpec { field: BookingField::Players, label: "Players", input_type: "number", min: Some("1"), max: Some("8") },
];

#[component]
pub fn BookingForm() -> impl IntoView {
    let fields = RwSignal::new(BookingInput::default());
    // `None` until the first submit, so untouched fields carry no aria-invalid.
    let errors = RwSignal::new(None::<BookingErrors>);
    let status = RwSignal::new(None::<FormStatus>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = fields.with_untracked(submit_booking);
        errors.set(Some(outcome.errors));
        status.set(Some(outcome.status));
        if outcome.accepted() {
            fields.update(|f| *f = f.after_submit(&outcome));
        }
    };

    view! {
        <form id="bookingForm" class="booking-form" novalidate on:submit=on_submit>
            {FIELDS
                .iter()
                .map(|spec| {
                    let field = spec.field;
                    let error_id = format!("{}-error", field.name());
                    view! {
                        <label class="field">
                            <span class="field__label">{spec.label}</span>
                            <input
                                name=field.name()
                                type=spec.input_type
                                min=spec.min
                                max=spec.max
                                aria-describedby=error_id.clone()
                                aria-invalid=move || errors.get().map(|e| e.aria_invalid(field))
                                prop:value=move || fields.with(|f| f.value(field).to_owned())
                                on:input=move |ev| fields.update(|f| f.set(field, event_target_value(&ev)))
                            />
                            <span id=error_id class="error" aria-live="polite">
                                {move || errors.get().and_then(|e| e.get(field)).unwrap_or_default()}
                            </span>
                        </label>
                    }
                })
                .collect_view()}
            <button class="btn btn--primary" type="submit">"Request booking"</button>
            <p
                id="bookingStatus"
                class="form-status"
                role="status"
                style=move || status.get().map(|s| s.style())
            >
                {move || status.get().map(|s| s.message).unwrap_or_default()}
            </p>
        </form>
    }
}
