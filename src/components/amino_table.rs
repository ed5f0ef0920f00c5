use yew::prelude::*;

use crate::data::CoverageResult;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AminoTableProps {
	pub result: CoverageResult,
}

/// Renders one row per amino acid; entries the backend did not report show a
/// dash rather than a fabricated zero.
#[function_component]
pub fn AminoTable(props: &AminoTableProps) -> Html {
	let cell = |value: Option<f64>| match value {
		Some(value) => format!("{value:.1}"),
		None => "-".to_owned(),
	};
	html! {
		<table class="table is-striped is-fullwidth" data-cy="amino-acid-table">
			<thead>
				<tr>
					<th>{"Amino acid"}</th>
					<th>{"Intake (g)"}</th>
					<th>{"Daily need (g)"}</th>
					<th>{"Coverage (%)"}</th>
				</tr>
			</thead>
			<tbody>
				{for props.result.rows().into_iter().map(|row| html! {
					<tr>
						<td>{row.amino_acid.clone()}</td>
						<td>{cell(row.sum)}</td>
						<td>{cell(row.need)}</td>
						<td>{cell(row.coverage)}</td>
					</tr>
				})}
			</tbody>
		</table>
	}
}
