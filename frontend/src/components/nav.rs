use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    /// Unconditional close, used by every nav link.
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        Rc::new(MenuState { open })
    }
}

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Detection, "Detection"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let active = menu.open.then(|| "active");

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-paw"></i>{" PawScript"}
                </Link<Route>>
                <ul class={classes!("nav-menu", active)}>
                    { for LINKS.iter().map(|(route, label)| html! {
                        <li class="nav-item" onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
                <button class={classes!("hamburger", active)} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
