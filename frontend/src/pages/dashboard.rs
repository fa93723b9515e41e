use crate::components::search_bar::SearchBar;
use crate::components::summary_cards::SummaryCards;
use crate::components::tab_bar::{DashboardTab, TabBar};
use crate::components::toast::{ToastContext, ToastType};
use crate::components::topbar::Topbar;
use crate::export::download_json;
use crate::pages::import_judges::ImportJudges;
use crate::pages::judges::JudgesPanel;
use crate::pages::schedule::SchedulePanel;
use crate::pages::settings::SettingsPanel;
use crate::pages::startups::StartupsPanel;
use crate::state::{DashboardAction, DashboardState, TableAction};
use chrono::Local;
use log::error;
use shared::{DashboardSummary, JudgeRecord, Record, RowStore};
use yew::functional::use_reducer_eq;
use yew::prelude::*;

fn export<T: Record>(toasts: &ToastContext, filename: &str, rows: &RowStore<T>) {
    if let Err(e) = download_json(filename, &rows.records()) {
        error!("Export to {} failed: {:?}", filename, e);
        toasts.show(format!("Could not export {}", filename), ToastType::Error);
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let toasts = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer_eq(DashboardState::default);
    let dark_mode = use_state(|| false);
    let import_open = use_state(|| false);
    let google_token = use_state(|| None::<String>);

    // Import results come back through the judges reducer as a notice.
    {
        let toasts = toasts.clone();
        use_effect_with(state.judges.notice.clone(), move |notice| {
            if let Some(notice) = notice {
                toasts.show(notice.message.clone(), ToastType::Success);
            }
            || ()
        });
    }

    let summary = DashboardSummary::compute(
        &state.startups.crud.rows,
        &state.judges.crud.rows,
        &state.schedule.crud.rows,
        Local::now().naive_local(),
    );

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: DashboardAction| state.dispatch(action))
    };

    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: ()| dark_mode.set(!*dark_mode))
    };

    let on_import = {
        let active_tab = state.active_tab;
        let import_open = import_open.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            if active_tab.supports_import() {
                import_open.set(true);
            } else {
                toasts.show("Import is only available for judges.", ToastType::Info);
            }
        })
    };

    let on_export = {
        let state = state.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(filename) = state.active_tab.export_filename() else {
                return;
            };
            match state.active_tab {
                DashboardTab::Startups => export(&toasts, filename, &state.startups.crud.rows),
                DashboardTab::Judges => export(&toasts, filename, &state.judges.crud.rows),
                DashboardTab::Schedule => export(&toasts, filename, &state.schedule.crud.rows),
                DashboardTab::Settings => {}
            }
        })
    };

    let on_imported = dispatch.reform(|records: Vec<JudgeRecord>| DashboardAction::Judges(TableAction::Merge(records)));

    let on_token = {
        let google_token = google_token.clone();
        Callback::from(move |token: String| google_token.set(Some(token)))
    };

    let on_import_close = {
        let import_open = import_open.clone();
        Callback::from(move |_: ()| import_open.set(false))
    };

    let tab = state.active_tab;
    let panel = match tab {
        DashboardTab::Startups => html! {
            <StartupsPanel state={state.startups.clone()} dispatch={dispatch.reform(DashboardAction::Startups)} />
        },
        DashboardTab::Judges => html! {
            <JudgesPanel state={state.judges.clone()} dispatch={dispatch.reform(DashboardAction::Judges)} />
        },
        DashboardTab::Schedule => html! {
            <SchedulePanel
                state={state.schedule.clone()}
                dispatch={dispatch.reform(DashboardAction::Schedule)}
                viewed_date={state.schedule_date}
                on_view_date={dispatch.reform(DashboardAction::ViewDate)}
            />
        },
        DashboardTab::Settings => html! {
            <SettingsPanel edit_mode={state.edit_mode()} on_edit_mode={dispatch.reform(DashboardAction::SetEditMode)} />
        },
    };

    html! {
        <div class={classes!("dashboard", dark_mode.then_some("dark-mode"))}>
            <Topbar dark_mode={*dark_mode} {on_toggle_theme} />
            <SummaryCards {summary} />
            <TabBar active={tab} on_select={dispatch.reform(DashboardAction::SelectTab)} />

            if tab.shows_search() {
                <SearchBar />
            }

            if tab.shows_actions() {
                <div class="action-buttons">
                    if let Some(label) = tab.add_label() {
                        <button class="action-button add" onclick={dispatch.reform(|_: MouseEvent| DashboardAction::OpenCreate)}>{label}</button>
                    }
                    <button class="action-button import" onclick={on_import}>{"Import"}</button>
                    <button class="action-button export" onclick={on_export}>{"Export"}</button>
                </div>
            }

            {panel}

            if *import_open {
                <ImportJudges
                    access_token={(*google_token).clone()}
                    {on_token}
                    {on_imported}
                    on_close={on_import_close}
                />
            }
        </div>
    }
}
