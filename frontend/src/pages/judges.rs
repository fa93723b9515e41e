use crate::components::form_field::{SelectField, TextField};
use crate::components::modal::FormModal;
use crate::state::{TableAction, TableState};
use log::warn;
use shared::{JudgeRecord, JudgeStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct JudgesPanelProps {
    pub state: TableState<JudgeRecord>,
    pub dispatch: Callback<TableAction<JudgeRecord>>,
}

fn status_options() -> Vec<&'static str> {
    JudgeStatus::ALL.iter().map(|s| s.as_str()).collect()
}

#[function_component(JudgesPanel)]
pub fn judges_panel(props: &JudgesPanelProps) -> Html {
    let state = &props.state;
    let dispatch = props.dispatch.clone();
    let on_field = dispatch.reform(|(name, value): (String, String)| TableAction::UpdateField { name, value });

    let rows = state.crud.rows.iter().map(|row| {
        let id = row.id;
        let record = row.record.clone();

        // Status is edited straight from the table without moving the row.
        let on_status = {
            let dispatch = dispatch.clone();
            let record = record.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                match select.value().parse::<JudgeStatus>() {
                    Ok(status) => dispatch.emit(TableAction::Replace(id, JudgeRecord { status, ..record.clone() })),
                    Err(err) => warn!("Ignoring status change: {}", err),
                }
            })
        };

        html! {
            <tr key={id.to_string()}>
                <td>{&record.id_no}</td>
                <td>{&record.name}</td>
                <td>{&record.email}</td>
                <td>{record.expertise.clone().unwrap_or_default()}</td>
                <td>
                    <select onchange={on_status}>
                        {for JudgeStatus::ALL.iter().map(|status| html! {
                            <option value={status.as_str()} selected={*status == record.status}>{status.as_str()}</option>
                        })}
                    </select>
                </td>
                <td>
                    <span class="icon" title="Edit" onclick={dispatch.reform(move |_: MouseEvent| TableAction::OpenEdit(id))}>{"✎"}</span>
                    <span class="icon" title="Delete" onclick={dispatch.reform(move |_: MouseEvent| TableAction::Delete(id))}>{"🗑"}</span>
                </td>
            </tr>
        }
    });

    let draft = &state.crud.draft;

    html! {
        <>
            <div class="table-wrapper">
                <table class="judge-table">
                    <thead>
                        <tr>
                            <th>{"ID NO"}</th>
                            <th>{"NAME"}</th>
                            <th>{"EMAIL"}</th>
                            <th>{"EXPERTISE"}</th>
                            <th>{"STATUS"}</th>
                            <th>{"ACTIONS"}</th>
                        </tr>
                    </thead>
                    <tbody>{for rows}</tbody>
                </table>
            </div>

            if state.crud.modal.is_open() {
                <FormModal
                    title={state.crud.modal_title()}
                    error={state.error.clone()}
                    on_close={dispatch.reform(|_: ()| TableAction::Cancel)}
                    on_submit={dispatch.reform(|_: ()| TableAction::Submit)}
                >
                    <TextField label="ID NO" name="idNo" value={draft.id_no.clone()} on_change={on_field.clone()} />
                    <TextField label="Name" name="name" value={draft.name.clone()} on_change={on_field.clone()} />
                    <TextField label="Email" name="email" input_type="email" value={draft.email.clone()} on_change={on_field.clone()} />
                    <TextField
                        label="Expertise"
                        name="expertise"
                        required={false}
                        value={draft.expertise.clone().unwrap_or_default()}
                        on_change={on_field.clone()}
                    />
                    <SelectField
                        label="Status"
                        name="status"
                        value={draft.status.as_str()}
                        options={status_options()}
                        on_change={on_field}
                    />
                </FormModal>
            }
        </>
    }
}
