use leptos::*;

use prosper_core::util::currency::format_usd;
use prosper_entities::plan::{PlanKind, SavingsPlan};

#[component]
pub fn PlanCard(
    plan: SavingsPlan,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<PlanKind>,
) -> impl IntoView {
    let annual_savings = format_usd(plan.annual_savings());
    let SavingsPlan {
        kind,
        current_costs,
        new_costs,
        installation_cost,
        eligible_rebates,
    } = plan;

    view! {
      <div class="bg-white rounded-lg shadow-md overflow-hidden">
        <div
          class="cursor-pointer p-6 hover:bg-gray-50 transition-colors"
          on:click = move |_| on_toggle.call(kind)
        >
          <h3 class="text-xl font-semibold text-gray-900 mb-2">{ kind.title() }</h3>
          <p class="text-lg text-green-600 font-medium">{ annual_savings } "/year savings"</p>
        </div>
        { move || expanded.get().then(|| view! {
          <div class="px-6 pb-6 space-y-4 border-t border-gray-100">
            <div class="grid grid-cols-2 gap-4 mt-4">
              <div>
                <h4 class="text-sm font-medium text-gray-500 mb-2">"Current Annual Costs"</h4>
                <p class="text-gray-900">"Heating: " { format_usd(current_costs.heating) }</p>
                <p class="text-gray-900">"Cooling: " { format_usd(current_costs.cooling) }</p>
              </div>
              <div>
                <h4 class="text-sm font-medium text-gray-500 mb-2">"New Annual Costs"</h4>
                <p class="text-green-600">"Heating: " { format_usd(new_costs.heating) }</p>
                <p class="text-green-600">"Cooling: " { format_usd(new_costs.cooling) }</p>
              </div>
            </div>
            <div class="space-y-2">
              <h4 class="text-sm font-medium text-gray-500">"Installation Details"</h4>
              <p class="text-gray-900">"Cost: " { format_usd(installation_cost) }</p>
              <p class="text-green-600">"Eligible Rebates: " { format_usd(eligible_rebates) }</p>
              <p class="text-gray-900 mt-4">{ kind.description() }</p>
            </div>
          </div>
        })}
      </div>
    }
}
