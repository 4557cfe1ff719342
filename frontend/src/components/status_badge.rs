use frontend::format::status_badge;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge_view(props: &StatusBadgeProps) -> Html {
    Html::from_html_unchecked(status_badge(&props.status).into())
}
