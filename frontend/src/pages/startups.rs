use crate::components::form_field::{SelectField, TextField};
use crate::components::modal::FormModal;
use crate::state::{TableAction, TableState};
use shared::{format_time, StartupRecord, StartupStatus};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StartupsPanelProps {
    pub state: TableState<StartupRecord>,
    pub dispatch: Callback<TableAction<StartupRecord>>,
}

#[function_component(StartupsPanel)]
pub fn startups_panel(props: &StartupsPanelProps) -> Html {
    let state = &props.state;
    let dispatch = props.dispatch.clone();
    let on_field = dispatch.reform(|(name, value): (String, String)| TableAction::UpdateField { name, value });

    let rows = state.crud.rows.iter().map(|row| {
        let id = row.id;
        let record = &row.record;
        // Stored slots come from a time input; show anything else verbatim.
        let slot = format_time(&record.pitch_slot).unwrap_or_else(|_| record.pitch_slot.clone());
        html! {
            <tr key={id.to_string()}>
                <td>{&record.company}</td>
                <td>{&record.category}</td>
                <td>{&record.team_leader}</td>
                <td>{&record.email}</td>
                <td>{slot}</td>
                <td>{record.status.as_str()}</td>
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
                <table class="startup-table">
                    <thead>
                        <tr>
                            <th>{"Company"}</th>
                            <th>{"Category"}</th>
                            <th>{"Team Leader"}</th>
                            <th>{"Email"}</th>
                            <th>{"Pitch Slot"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
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
                    <TextField label="Company" name="company" value={draft.company.clone()} on_change={on_field.clone()} />
                    <TextField label="Category" name="category" value={draft.category.clone()} on_change={on_field.clone()} />
                    <TextField label="Team Leader" name="teamLeader" value={draft.team_leader.clone()} on_change={on_field.clone()} />
                    <TextField label="Email" name="email" input_type="email" value={draft.email.clone()} on_change={on_field.clone()} />
                    <TextField label="Pitch Slot" name="pitchSlot" input_type="time" value={draft.pitch_slot.clone()} on_change={on_field.clone()} />
                    <SelectField
                        label="Status"
                        name="status"
                        value={draft.status.as_str()}
                        options={StartupStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>()}
                        on_change={on_field}
                    />
                </FormModal>
            }
        </>
    }
}
