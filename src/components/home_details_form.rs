use leptos::{ev, *};
use strum::IntoEnumIterator;

use prosper_entities::home::{
    CoolingSystem, FloorCount, HeatingSystem, HomeDetails, HomeDetailsField,
};

const INPUT_CLASS: &str = "w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:border-blue-500 focus:ring-1 focus:ring-blue-500 text-gray-900 bg-white";
const LABEL_CLASS: &str = "block text-sm font-medium mb-2 text-white";

#[component]
pub fn HomeDetailsForm(
    details: Signal<HomeDetails>,
    #[prop(into)] on_change: Callback<(HomeDetailsField, String)>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let num_floors =
        Signal::derive(move || details.with(|d| <&'static str>::from(d.num_floors)));
    let heating_system =
        Signal::derive(move || details.with(|d| <&'static str>::from(d.heating_system)));
    let cooling_system =
        Signal::derive(move || details.with(|d| <&'static str>::from(d.cooling_system)));

    view! {
      <form
        class="space-y-6"
        on:submit = move |ev: ev::SubmitEvent| {
          ev.prevent_default();
          on_submit.call(());
        }
      >
        <div>
          <label for="squareFootage" class=LABEL_CLASS>"Square Footage"</label>
          <input
            type = "number"
            id = "squareFootage"
            required
            class=INPUT_CLASS
            prop:value = move || details.with(|d| d.square_footage.clone())
            on:input = move |ev| {
              on_change.call((HomeDetailsField::SquareFootage, event_target_value(&ev)));
            }
          />
        </div>
        <SelectField
          id = "numFloors"
          label = "Number of Floors"
          options = select_options(FloorCount::label)
          selected = num_floors
          on_change = move |value: String| on_change.call((HomeDetailsField::NumFloors, value))
        />
        <SelectField
          id = "heatingSystem"
          label = "Current Heating System"
          options = select_options(HeatingSystem::label)
          selected = heating_system
          on_change = move |value: String| on_change.call((HomeDetailsField::HeatingSystem, value))
        />
        <SelectField
          id = "coolingSystem"
          label = "Current Cooling System"
          options = select_options(CoolingSystem::label)
          selected = cooling_system
          on_change = move |value: String| on_change.call((HomeDetailsField::CoolingSystem, value))
        />
        <div class="pt-4">
          <button
            type = "submit"
            class="w-full bg-blue-600 text-white py-3 px-6 rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transition-colors"
          >
            "Continue"
          </button>
        </div>
      </form>
    }
}

#[component]
fn SelectField(
    id: &'static str,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    selected: Signal<&'static str>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
      <div>
        <label for=id class=LABEL_CLASS>{ label }</label>
        <select
          id=id
          class=INPUT_CLASS
          on:change = move |ev| on_change.call(event_target_value(&ev))
        >
          { options
              .into_iter()
              .map(|(value, text)| view! {
                <option value=value selected=move || selected.get() == value>{ text }</option>
              })
              .collect_view()
          }
        </select>
      </div>
    }
}

/// `(form value, label)` of every variant.
fn select_options<T>(label: fn(T) -> &'static str) -> Vec<(&'static str, &'static str)>
where
    T: IntoEnumIterator + Into<&'static str> + Copy,
{
    T::iter().map(|t| (t.into(), label(t))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_options() {
        assert_eq!(
            select_options(FloorCount::label),
            vec![
                ("1", "1 Floor"),
                ("2", "2 Floors"),
                ("3", "3 Floors"),
                ("4", "4+ Floors")
            ]
        );
    }

    #[test]
    fn heating_options() {
        let values: Vec<_> = select_options(HeatingSystem::label)
            .into_iter()
            .map(|(value, _)| value)
            .collect();
        assert_eq!(
            values,
            vec!["furnace", "boiler", "electric", "heat_pump", "other"]
        );
    }

    #[test]
    fn cooling_options() {
        assert_eq!(
            select_options(CoolingSystem::label).last(),
            Some(&("none", "No Cooling System"))
        );
    }
}
