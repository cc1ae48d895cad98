use payloads::{
    EmployeeId, ExpenseCategory, ExpenseItem, ProjectId, requests, responses,
};
use rust_decimal::Decimal;
use std::rc::Rc;
use std::str::FromStr;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::{use_employees, use_projects};
use crate::utils::format_money;
use crate::{State, get_api_client};

/// One editable draft line. Inputs are kept as raw strings so partial
/// keystrokes survive re-renders; rows convert to wire items only when the
/// whole draft validates.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: String,
    /// ISO date string from the date input.
    pub incurred_on: String,
}

impl Default for DraftRow {
    fn default() -> Self {
        Self {
            description: String::new(),
            category: ExpenseCategory::Other,
            amount: String::new(),
            incurred_on: String::new(),
        }
    }
}

impl DraftRow {
    fn from_item(item: &ExpenseItem) -> Self {
        Self {
            description: item.description.clone(),
            category: item.category,
            amount: item.amount.to_string(),
            incurred_on: item.incurred_on.to_string(),
        }
    }

    fn to_item(&self) -> Result<ExpenseItem, String> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Each line needs a description".to_string());
        }
        let amount = match requests::validate_amount(&self.amount) {
            requests::AmountValidation::Valid(amount) => amount,
            invalid => {
                return Err(format!(
                    "{}: {}",
                    description,
                    invalid.error_message().unwrap_or("invalid amount")
                ));
            }
        };
        let incurred_on = jiff::civil::Date::from_str(&self.incurred_on)
            .map_err(|_| format!("{description}: a date is required"))?;
        Ok(ExpenseItem {
            description: description.to_string(),
            category: self.category,
            amount,
            incurred_on,
        })
    }
}

/// The whole multi-row draft, managed through a reducer so row edits,
/// inserts, and removals all go through one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub rows: Vec<DraftRow>,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            rows: vec![DraftRow::default()],
        }
    }
}

pub enum ExpenseDraftAction {
    AddRow,
    RemoveRow(usize),
    SetDescription(usize, String),
    SetCategory(usize, ExpenseCategory),
    SetAmount(usize, String),
    SetIncurredOn(usize, String),
    Reset,
}

impl Reducible for ExpenseDraft {
    type Action = ExpenseDraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut rows = self.rows.clone();
        match action {
            ExpenseDraftAction::AddRow => rows.push(DraftRow::default()),
            ExpenseDraftAction::RemoveRow(index) => {
                if index < rows.len() {
                    rows.remove(index);
                }
                // Never show an empty table; an empty draft is one blank row.
                if rows.is_empty() {
                    rows.push(DraftRow::default());
                }
            }
            ExpenseDraftAction::SetDescription(index, value) => {
                if let Some(row) = rows.get_mut(index) {
                    row.description = value;
                }
            }
            ExpenseDraftAction::SetCategory(index, value) => {
                if let Some(row) = rows.get_mut(index) {
                    row.category = value;
                }
            }
            ExpenseDraftAction::SetAmount(index, value) => {
                if let Some(row) = rows.get_mut(index) {
                    row.amount = value;
                }
            }
            ExpenseDraftAction::SetIncurredOn(index, value) => {
                if let Some(row) = rows.get_mut(index) {
                    row.incurred_on = value;
                }
            }
            ExpenseDraftAction::Reset => rows = vec![DraftRow::default()],
        }
        Rc::new(ExpenseDraft { rows })
    }
}

impl ExpenseDraft {
    fn from_report(report: &responses::ExpenseReport) -> Self {
        let rows: Vec<DraftRow> = report
            .items
            .iter()
            .map(|line| DraftRow::from_item(&line.item_details))
            .collect();
        if rows.is_empty() {
            Self::default()
        } else {
            Self { rows }
        }
    }

    /// Convert every row to a wire item, or report the first problem.
    pub fn to_items(&self) -> Result<Vec<ExpenseItem>, String> {
        self.rows.iter().map(DraftRow::to_item).collect()
    }

    /// Running total of the rows that parse, for live display while the
    /// draft is still incomplete.
    pub fn running_total(&self) -> Decimal {
        self.rows
            .iter()
            .filter_map(|row| match requests::validate_amount(&row.amount) {
                requests::AmountValidation::Valid(amount) => Some(amount),
                _ => None,
            })
            .sum()
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// When set, edits this report's draft instead of creating a new one.
    #[prop_or_default]
    pub existing: Option<responses::ExpenseReport>,
    pub on_success: Callback<responses::ExpenseReport>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component]
pub fn ExpenseEditor(props: &Props) -> Html {
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let employees = use_employees();
    let projects = use_projects();

    let draft = use_reducer(|| match &props.existing {
        Some(report) => ExpenseDraft::from_report(report),
        None => ExpenseDraft::default(),
    });
    let selected_employee =
        use_state(|| props.existing.as_ref().map(|r| r.employee_id));
    let selected_project =
        use_state(|| props.existing.as_ref().and_then(|r| r.project_id));
    let is_submitting = use_state(|| false);

    let on_employee_change = {
        let selected_employee = selected_employee.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_employee.set(EmployeeId::from_str(&select.value()).ok());
        })
    };

    let on_project_change = {
        let selected_project = selected_project.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected_project.set(ProjectId::from_str(&select.value()).ok());
        })
    };

    let on_add_row = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(ExpenseDraftAction::AddRow);
        })
    };

    let can_submit = selected_employee.is_some()
        && draft.to_items().is_ok()
        && !*is_submitting;

    let on_submit = {
        let draft = draft.clone();
        let selected_employee = selected_employee.clone();
        let selected_project = selected_project.clone();
        let is_submitting = is_submitting.clone();
        let existing_id = props.existing.as_ref().map(|r| r.report_id);
        let on_success = props.on_success.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(employee_id) = *selected_employee else {
                return;
            };
            let items = match draft.to_items() {
                Ok(items) => items,
                Err(problem) => {
                    toast.error(problem);
                    return;
                }
            };
            let project_id = *selected_project;

            let is_submitting = is_submitting.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            is_submitting.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match existing_id {
                    Some(id) => {
                        api_client
                            .update_expense_report(
                                &id,
                                &requests::UpdateExpenseReport {
                                    project_id,
                                    items,
                                },
                            )
                            .await
                    }
                    None => {
                        api_client
                            .create_expense_report(
                                &requests::CreateExpenseReport {
                                    employee_id,
                                    project_id,
                                    items,
                                },
                            )
                            .await
                    }
                };
                match result {
                    Ok(report) => {
                        dispatch.reduce_mut(|s| {
                            s.upsert_report(report.clone());
                        });
                        toast.success(match existing_id {
                            Some(_) => "Draft updated",
                            None => "Draft saved",
                        });
                        on_success.emit(report);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let input_class = "w-full px-2 py-1.5 rounded-md border \
                       border-neutral-300 dark:border-neutral-600 bg-white \
                       dark:bg-neutral-700 text-sm focus:outline-none \
                       focus:ring-2 focus:ring-neutral-500";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={label_class}>{"Employee"}</label>
                    <select
                        class={input_class}
                        onchange={on_employee_change}
                        disabled={props.existing.is_some()}
                    >
                        <option value="" selected={selected_employee.is_none()}>
                            {"Select an employee"}
                        </option>
                        {employees.state.data().map(|employees| employees.iter().map(|employee| {
                            let id = employee.employee_id;
                            html! {
                                <option
                                    value={id.to_string()}
                                    selected={*selected_employee == Some(id)}
                                >
                                    {&employee.employee_details.name}
                                </option>
                            }
                        }).collect::<Html>()).unwrap_or_default()}
                    </select>
                </div>
                <div>
                    <label class={label_class}>{"Project (optional)"}</label>
                    <select class={input_class} onchange={on_project_change}>
                        <option value="" selected={selected_project.is_none()}>
                            {"No project"}
                        </option>
                        {projects.state.data().map(|projects| projects.iter().map(|project| {
                            let id = project.project_id;
                            html! {
                                <option
                                    value={id.to_string()}
                                    selected={*selected_project == Some(id)}
                                >
                                    {&project.project_details.name}
                                </option>
                            }
                        }).collect::<Html>()).unwrap_or_default()}
                    </select>
                </div>
            </div>

            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-neutral-600 dark:text-neutral-400">
                        <th class="pb-2 font-medium">{"Description"}</th>
                        <th class="pb-2 font-medium w-36">{"Category"}</th>
                        <th class="pb-2 font-medium w-28">{"Amount"}</th>
                        <th class="pb-2 font-medium w-40">{"Date"}</th>
                        <th class="pb-2 w-10"></th>
                    </tr>
                </thead>
                <tbody>
                    {draft.rows.iter().enumerate().map(|(index, row)| {
                        draft_row_view(&draft, index, row, input_class)
                    }).collect::<Html>()}
                </tbody>
            </table>

            <div class="flex items-center justify-between">
                <button
                    type="button"
                    onclick={on_add_row}
                    class="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-300 dark:hover:text-neutral-100 transition-colors"
                >
                    {"+ Add line"}
                </button>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Total: "}
                    <span class="font-medium text-neutral-900 dark:text-neutral-100">
                        {format_money(draft.running_total())}
                    </span>
                </p>
            </div>

            <div class="flex justify-end space-x-3 pt-2">
                if let Some(on_cancel) = &props.on_cancel {
                    <button
                        type="button"
                        onclick={on_cancel.reform(|_| ())}
                        class="px-4 py-2 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                }
                <button
                    type="submit"
                    disabled={!can_submit}
                    class="px-4 py-2 rounded-md text-sm font-medium bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if *is_submitting { "Saving..." } else { "Save draft" }}
                </button>
            </div>
        </form>
    }
}

fn draft_row_view(
    draft: &UseReducerHandle<ExpenseDraft>,
    index: usize,
    row: &DraftRow,
    input_class: &'static str,
) -> Html {
    let on_description_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(ExpenseDraftAction::SetDescription(
                index,
                input.value(),
            ));
        })
    };
    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(picked) = ExpenseCategory::ALL
                .iter()
                .find(|c| c.label() == select.value())
            {
                draft.dispatch(ExpenseDraftAction::SetCategory(
                    index, *picked,
                ));
            }
        })
    };
    let on_amount_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft
                .dispatch(ExpenseDraftAction::SetAmount(index, input.value()));
        })
    };
    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(ExpenseDraftAction::SetIncurredOn(
                index,
                input.value(),
            ));
        })
    };
    let on_remove = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(ExpenseDraftAction::RemoveRow(index));
        })
    };

    html! {
        <tr key={index}>
            <td class="pr-2 pb-2">
                <input
                    type="text"
                    class={input_class}
                    value={row.description.clone()}
                    onchange={on_description_change}
                />
            </td>
            <td class="pr-2 pb-2">
                <select class={input_class} onchange={on_category_change}>
                    {ExpenseCategory::ALL.iter().map(|c| html! {
                        <option selected={row.category == *c}>{c.label()}</option>
                    }).collect::<Html>()}
                </select>
            </td>
            <td class="pr-2 pb-2">
                <input
                    type="text"
                    inputmode="decimal"
                    class={input_class}
                    value={row.amount.clone()}
                    onchange={on_amount_change}
                />
            </td>
            <td class="pr-2 pb-2">
                <input
                    type="date"
                    class={input_class}
                    value={row.incurred_on.clone()}
                    onchange={on_date_change}
                />
            </td>
            <td class="pb-2">
                <button
                    type="button"
                    onclick={on_remove}
                    aria-label="Remove line"
                    class="text-neutral-400 hover:text-red-600 dark:hover:text-red-400 transition-colors"
                >
                    {"✕"}
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(description: &str, amount: &str, date: &str) -> DraftRow {
        DraftRow {
            description: description.into(),
            category: ExpenseCategory::Travel,
            amount: amount.into(),
            incurred_on: date.into(),
        }
    }

    #[test]
    fn draft_starts_with_one_blank_row() {
        let draft = ExpenseDraft::default();
        assert_eq!(draft.rows.len(), 1);
        assert!(draft.to_items().is_err());
    }

    #[test]
    fn reducer_add_edit_remove() {
        let draft = Rc::new(ExpenseDraft::default());
        let draft = draft.reduce(ExpenseDraftAction::AddRow);
        assert_eq!(draft.rows.len(), 2);

        let draft = draft.reduce(ExpenseDraftAction::SetDescription(
            1,
            "Taxi".into(),
        ));
        let draft =
            draft.reduce(ExpenseDraftAction::SetAmount(1, "19.80".into()));
        assert_eq!(draft.rows[1].description, "Taxi");
        assert_eq!(draft.rows[0].description, "");

        let draft = draft.reduce(ExpenseDraftAction::RemoveRow(0));
        assert_eq!(draft.rows.len(), 1);
        assert_eq!(draft.rows[0].description, "Taxi");
    }

    #[test]
    fn removing_the_last_row_leaves_a_blank_one() {
        let draft = Rc::new(ExpenseDraft::default());
        let draft = draft.reduce(ExpenseDraftAction::RemoveRow(0));
        assert_eq!(draft.rows.len(), 1);
        assert_eq!(*draft, ExpenseDraft::default());
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let draft = Rc::new(ExpenseDraft::default());
        let draft = draft
            .reduce(ExpenseDraftAction::SetDescription(5, "ghost".into()));
        assert_eq!(*draft, ExpenseDraft::default());
    }

    #[test]
    fn valid_rows_convert_to_wire_items() {
        let draft = ExpenseDraft {
            rows: vec![
                filled_row("Flight", "420.00", "2026-08-01"),
                filled_row("Hotel", "180.50", "2026-08-02"),
            ],
        };
        let items = draft.to_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount, Decimal::new(42000, 2));
        assert_eq!(items[1].incurred_on, jiff::civil::date(2026, 8, 2));
        assert_eq!(draft.running_total(), Decimal::new(60050, 2));
    }

    #[test]
    fn first_invalid_row_reports_its_problem() {
        let draft = ExpenseDraft {
            rows: vec![
                filled_row("Flight", "420.00", "2026-08-01"),
                filled_row("Hotel", "-5", "2026-08-02"),
            ],
        };
        let err = draft.to_items().unwrap_err();
        assert!(err.contains("Hotel"));
        assert!(err.contains("greater than 0"));
    }

    #[test]
    fn missing_date_is_rejected() {
        let draft = ExpenseDraft {
            rows: vec![filled_row("Flight", "420.00", "")],
        };
        let err = draft.to_items().unwrap_err();
        assert!(err.contains("date"));
    }
}
