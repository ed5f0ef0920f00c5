use yew::prelude::*;

use crate::data::FoodItem;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct FoodCardProps {
	pub item: FoodItem,
	pub selected: bool,
	pub ontoggle: Callback<FoodItem>,
}

#[function_component]
pub fn FoodCard(props: &FoodCardProps) -> Html {
	let onclick = {
		let item = props.item.clone();
		props.ontoggle.reform(move |_: MouseEvent| item.clone())
	};
	let style = match props.selected {
		true => "background-color: #b9ddff; cursor: pointer;",
		false => "cursor: pointer;",
	};
	html! {
		<div class="card" {style} data-cy={format!("food-item-{}", props.item.id)} {onclick}>
			<div class="card-content">
				<p class="is-size-5">{&props.item.name}</p>
				{if props.selected {
					html! { <span class="tag is-success">{"selected"}</span> }
				} else {
					html! {}
				}}
			</div>
		</div>
	}
}
