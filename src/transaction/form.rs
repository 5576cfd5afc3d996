use maud::{Markup, html};
use time::Date;

use crate::{
    cadence::{Cadence, Flow},
    category::CategoryId,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
};

/// The form for logging a new transaction.
///
/// The browser refuses to submit the form with a missing label or an amount
/// below one cent.
pub fn new_transaction_form(today: Date) -> Markup {
    html! {
        form
            id="new-transaction-form"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label for="label" class=(FORM_LABEL_STYLE) { "Label" }

                input
                    name="label"
                    id="label"
                    type="text"
                    placeholder="Rent"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.01"
                        min="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Flow" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for flow in Flow::ALL {
                        (radio_option("flow", flow.as_str(), flow.label(), flow == Flow::Expense))
                    }
                }
            }

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Cadence" }

                div class="grid grid-cols-2 gap-2"
                {
                    @for cadence in Cadence::ALL {
                        (radio_option("cadence", cadence.as_str(), cadence.label(), cadence == Cadence::Monthly))
                    }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category" id="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in CategoryId::ALL {
                        @if category == CategoryId::Essentials {
                            option value=(category.as_str()) selected { (category.name()) }
                        } @else {
                            option value=(category.as_str()) { (category.name()) }
                        }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(today)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="note" class=(FORM_LABEL_STYLE) { "Note" }

                input
                    name="note"
                    id="note"
                    type="text"
                    placeholder="Optional"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add transaction" }
        }
    }
}

fn radio_option(name: &str, value: &str, label: &str, checked: bool) -> Markup {
    let id = format!("{name}-{value}");

    html! {
        div class="flex items-center gap-3"
        {
            input
                name=(name)
                id=(id)
                type="radio"
                value=(value)
                checked[checked]
                required
                tabindex="0"
                class=(FORM_RADIO_INPUT_STYLE);

            label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (label) }
        }
    }
}
