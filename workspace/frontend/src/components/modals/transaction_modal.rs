use common::{Account, Transaction, TransactionDraft, TransactionType};
use yew::prelude::*;

use crate::api_client::transaction::create_transaction;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub show: bool,
    pub accounts: Vec<Account>,
    /// Account preselected in the form
    #[prop_or_default]
    pub default_account: Option<i32>,
    pub on_close: Callback<()>,
    pub on_success: Callback<Transaction>,
}

/// Read the form fields into a draft; missing fields stay empty and are
/// reported by validation
fn read_draft(form: &web_sys::HtmlFormElement) -> Option<TransactionDraft> {
    let form_data = web_sys::FormData::new_with_form(form).ok()?;
    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

    Some(TransactionDraft {
        date: field("date"),
        description: field("description"),
        transaction_type: field("transaction_type"),
        category: field("category"),
        amount: field("amount"),
        account_id: field("account_id"),
    })
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Fresh form every time the modal opens
    {
        let error_message = error_message.clone();
        let form_ref = form_ref.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                error_message.set(None);
                if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                    form.reset();
                }
            }
            || ()
        });
    }

    let on_submit = {
        let on_success = props.on_success.clone();
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let Some(draft) = form_ref
                .cast::<web_sys::HtmlFormElement>()
                .and_then(|form| read_draft(&form))
            else {
                log::error!("Transaction form is not mounted");
                return;
            };

            let locale = settings::get_settings().display_locale();
            let request = match draft.validate(&locale) {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("Rejected transaction form: {}", e);
                    error_message.set(Some(e.user_message()));
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();

            is_submitting.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Creating transaction: {}", request.description);
                match create_transaction(request).await {
                    Ok(transaction) => {
                        is_submitting.set(false);
                        on_success.emit(transaction);
                    }
                    Err(e) => {
                        error_message.set(Some(e.user_message()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(());
            }
        })
    };

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))} id="transaction_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{"Add Transaction"}</h3>

                if let Some(message) = &*error_message {
                    <div class="alert alert-error mt-4">
                        <i class="fas fa-exclamation-circle"></i>
                        <span>{message}</span>
                    </div>
                }

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4" novalidate={true}>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Date"}</span></label>
                            <input type="date" name="date" class="input input-bordered w-full" value={today} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Type"}</span></label>
                            <select name="transaction_type" class="select select-bordered w-full">
                                { for TransactionType::ALL.iter().rev().map(|kind| html! {
                                    <option value={kind.as_str()}>{ kind.label() }</option>
                                })}
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Description"}</span></label>
                        <input type="text" name="description" class="input input-bordered w-full" placeholder="e.g. Grocery Store" />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Amount"}</span></label>
                            <input type="text" inputmode="decimal" name="amount" class="input input-bordered w-full" placeholder="0.00" />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Category"}</span></label>
                            <input type="text" name="category" class="input input-bordered w-full" placeholder="e.g. Food" />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Account"}</span></label>
                        <select name="account_id" class="select select-bordered w-full">
                            <option value="" selected={props.default_account.is_none()}>{"Select an account"}</option>
                            { for props.accounts.iter().map(|account| html! {
                                <option value={account.id.to_string()} selected={props.default_account == Some(account.id)}>
                                    { &account.name }
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close.clone()} disabled={*is_submitting}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            if *is_submitting {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Save Transaction"}
                        </button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
