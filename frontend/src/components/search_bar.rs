use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Search box. It does not filter any table; submitting shows the query in
/// a blocking alert.
#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let query = use_state(String::new);

    let search = {
        let query = query.clone();
        Callback::from(move |_: ()| {
            debug!("Search submitted: {}", *query);
            gloo::dialogs::alert(&format!("You searched for: {}", *query));
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onkeydown = {
        let search = search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                search.emit(());
            }
        })
    };

    html! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search..."
                value={(*query).clone()}
                {oninput}
                {onkeydown}
            />
            <button class="search-button" onclick={search.reform(|_: MouseEvent| ())}>{"🔍"}</button>
        </div>
    }
}
