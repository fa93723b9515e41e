use crate::components::form_field::TextField;
use crate::components::modal::FormModal;
use crate::state::{TableAction, TableState};
use chrono::NaiveDate;
use shared::{format_date, format_time, ScheduleEntry};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SchedulePanelProps {
    pub state: TableState<ScheduleEntry>,
    pub dispatch: Callback<TableAction<ScheduleEntry>>,
    /// Date picked on the calendar
    pub viewed_date: NaiveDate,
    pub on_view_date: Callback<NaiveDate>,
}

/// Calendar view plus time-slot cards. Entries can only be added; the form
/// takes its date from the calendar.
#[function_component(SchedulePanel)]
pub fn schedule_panel(props: &SchedulePanelProps) -> Html {
    let state = &props.state;
    let dispatch = props.dispatch.clone();
    let viewed_date = props.viewed_date;
    let on_field = dispatch.reform(|(name, value): (String, String)| TableAction::UpdateField { name, value });

    let on_view_date = {
        let on_view_date = props.on_view_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(date) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") {
                on_view_date.emit(date);
            }
        })
    };

    let slots = state.crud.rows.iter().map(|row| {
        let entry = &row.record;
        let time = format_time(&entry.time).unwrap_or_else(|_| entry.time.clone());
        html! {
            <div
                key={row.id.to_string()}
                class={classes!("time-slot-card", (entry.selected_date == viewed_date).then_some("on-selected-date"))}
            >
                <p>{format!("TIME: {}", time)}</p>
                <p>{format!("TEAM NAME: {}", entry.team_name)}</p>
                <p>{format!("JUDGE: {}", entry.judge)}</p>
                <p>{format!("ROOM: {}", entry.room)}</p>
                <p>{format!("DATE: {}", format_date(entry.selected_date))}</p>
            </div>
        }
    });

    let draft = &state.crud.draft;

    html! {
        <div class="large-card">
            <div class="inner-card-container">
                <div class="pink-card">
                    <h3>{"CALENDAR VIEW"}</h3>
                    <input
                        type="date"
                        class="calendar-input"
                        value={viewed_date.format("%Y-%m-%d").to_string()}
                        onchange={on_view_date}
                    />
                    <p class="selected-date">{format!("Selected Date: {}", format_date(viewed_date))}</p>
                </div>
                <div class="pink-card">
                    <h4>{"TIME SLOTS"}</h4>
                    <div class="time-slot-container">{for slots}</div>
                </div>
            </div>

            if state.crud.modal.is_open() {
                <FormModal
                    title={state.crud.modal_title()}
                    error={state.error.clone()}
                    on_close={dispatch.reform(|_: ()| TableAction::Cancel)}
                    on_submit={dispatch.reform(|_: ()| TableAction::Submit)}
                >
                    <TextField label="Team Name" name="teamName" value={draft.team_name.clone()} on_change={on_field.clone()} />
                    <TextField label="Judge" name="judge" value={draft.judge.clone()} on_change={on_field.clone()} />
                    <TextField label="Room" name="room" value={draft.room.clone()} on_change={on_field.clone()} />
                    <TextField label="Time" name="time" input_type="time" value={draft.time.clone()} on_change={on_field.clone()} />
                    <TextField
                        label="Date"
                        name="selectedDate"
                        input_type="date"
                        value={draft.selected_date.format("%Y-%m-%d").to_string()}
                        on_change={on_field}
                    />
                </FormModal>
            }
        </div>
    }
}
