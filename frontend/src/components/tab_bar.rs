use yew::prelude::*;

/// Sections of the dashboard. A "Rounds" tab is drawn but cannot be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Startups,
    Judges,
    Schedule,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Startups,
        DashboardTab::Judges,
        DashboardTab::Schedule,
        DashboardTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Startups => "Startups",
            DashboardTab::Judges => "Judges",
            DashboardTab::Schedule => "Schedule",
            DashboardTab::Settings => "Settings",
        }
    }

    pub fn shows_search(&self) -> bool {
        matches!(self, DashboardTab::Startups | DashboardTab::Judges)
    }

    /// Add / Import / Export row
    pub fn shows_actions(&self) -> bool {
        !matches!(self, DashboardTab::Settings)
    }

    pub fn add_label(&self) -> Option<&'static str> {
        match self {
            DashboardTab::Startups => Some("Add Startup"),
            DashboardTab::Judges => Some("Add Judge"),
            DashboardTab::Schedule => Some("Add Schedule"),
            DashboardTab::Settings => None,
        }
    }

    pub fn supports_import(&self) -> bool {
        matches!(self, DashboardTab::Judges)
    }

    pub fn export_filename(&self) -> Option<&'static str> {
        match self {
            DashboardTab::Startups => Some("startups.json"),
            DashboardTab::Judges => Some("judges.json"),
            DashboardTab::Schedule => Some("schedule.json"),
            DashboardTab::Settings => None,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TabBarProps {
    pub active: DashboardTab,
    pub on_select: Callback<DashboardTab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let tab = |tab: DashboardTab| {
        let on_select = props.on_select.clone();
        html! {
            <div
                class={classes!("tab", (props.active == tab).then_some("active"))}
                onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
            >
                {tab.label()}
            </div>
        }
    };

    html! {
        <div class="tabs-container">
            {tab(DashboardTab::Startups)}
            {tab(DashboardTab::Judges)}
            {tab(DashboardTab::Schedule)}
            <div class="tab disabled" aria-disabled="true" title="Rounds are not available yet">{"Rounds"}</div>
            {tab(DashboardTab::Settings)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_only_on_record_tabs() {
        let with_search: Vec<_> = DashboardTab::ALL.into_iter().filter(|t| t.shows_search()).collect();
        assert_eq!(with_search, vec![DashboardTab::Startups, DashboardTab::Judges]);
    }

    #[test]
    fn test_settings_hides_action_row() {
        assert!(!DashboardTab::Settings.shows_actions());
        assert_eq!(DashboardTab::Settings.add_label(), None);
        for tab in [DashboardTab::Startups, DashboardTab::Judges, DashboardTab::Schedule] {
            assert!(tab.shows_actions());
            assert!(tab.export_filename().is_some());
        }
    }

    #[test]
    fn test_add_labels() {
        assert_eq!(DashboardTab::Startups.add_label(), Some("Add Startup"));
        assert_eq!(DashboardTab::Judges.add_label(), Some("Add Judge"));
        assert_eq!(DashboardTab::Schedule.add_label(), Some("Add Schedule"));
    }

    #[test]
    fn test_import_only_for_judges() {
        let importable: Vec<_> = DashboardTab::ALL.into_iter().filter(|t| t.supports_import()).collect();
        assert_eq!(importable, vec![DashboardTab::Judges]);
    }
}
