use shared::DashboardSummary;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: DashboardSummary,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let summary = &props.summary;

    let card = |title: &str, icon: &str, number: usize, description: String| {
        html! {
            <div class="card shadow">
                <div class="card-header">
                    <h2>{title.to_string()}</h2>
                    <span class="icon">{icon.to_string()}</span>
                </div>
                <div class="card-body">
                    <div class="number">{number}</div>
                    <p class="description">{description}</p>
                </div>
            </div>
        }
    };

    html! {
        <div class="card-container">
            {card("Total Startups", "👥", summary.total_startups, "Registered teams".to_string())}
            {card("Active Judges", "🏅", summary.active_judges, summary.judges_description())}
            {card("Upcoming Pitches", "📅", summary.upcoming_pitches, "Next 24 hours".to_string())}
        </div>
    }
}
