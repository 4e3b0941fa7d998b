//! The built-in six-week scenario: supplier delay, heat wave, quality
//! returns, cotton cost spike, DC labor shortage, competitor promotion.

use crate::{Choice, Event};

fn choice(
    id: &str,
    label: &str,
    transform_name: &str,
    student_feedback: &[&str],
    instructor_note: &str,
) -> Choice {
    Choice {
        id: id.to_string(),
        label: label.to_string(),
        transform_name: transform_name.to_string(),
        student_feedback: student_feedback.iter().map(|s| s.to_string()).collect(),
        instructor_note: instructor_note.to_string(),
    }
}

fn event(week: u8, id: &str, title: &str, description: &str, choices: Vec<Choice>) -> Event {
    Event {
        week,
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        choices,
    }
}

pub(crate) fn events() -> Vec<Event> {
    vec![
        event(
            2,
            "w2_supplier_delay_tops",
            "Week 2 — Some t-shirts will arrive late (Tops)",
            "Your main t-shirt supplier tells you a batch will arrive about a week late. \
             That could leave shelves thin for popular Tops this month. Choose how to reduce \
             the risk of stockouts.",
            vec![
                choice(
                    "A",
                    "Pay extra shipping to rush a portion in now.",
                    "w2_A_expedite_40",
                    &[
                        "WHAT YOU DID: You paid for faster shipping so part of the delayed t-shirts arrive sooner.",
                        "GOOD OUTCOMES: Fewer empty shelves in Tops; more sales captured while demand is hot.",
                        "TRADE-OFFS / RISKS: Higher costs this month; gross margin % will dip a bit.",
                        "WHAT TO LOOK FOR IN CHARTS: Pie (latest month) — Tops slice a little larger; Compact — Quantity lines nudge up; KPIs — Revenue up slightly, GM% down slightly.",
                        "WHAT TO WATCH NEXT WEEK: If demand stays strong, consider if the cost of expediting keeps paying off.",
                    ],
                    "Discuss service level vs. cost. When does paying to protect availability make sense?",
                ),
                choice(
                    "B",
                    "Don't rush; instead, discount other categories to shift demand.",
                    "w2_B_shift_demand_markdown",
                    &[
                        "WHAT YOU DID: You used small discounts elsewhere to steer shoppers to other items while you wait.",
                        "GOOD OUTCOMES: Cash is preserved (no rush fees) and other categories move faster.",
                        "TRADE-OFFS / RISKS: Discounts lower margin; you may not fully replace lost Tops sales.",
                        "WHAT TO LOOK FOR IN CHARTS: Pie — Other items' slices grow, Tops shrink a bit; Compact — Revenue mix shifts; KPIs — GM% softens due to markdowns.",
                        "WHAT TO WATCH NEXT WEEK: If Tops keep running short, compare the margin hit of markdowns vs. expediting.",
                    ],
                    "Demand shaping via price and the limits of substitution.",
                ),
                choice(
                    "C",
                    "Buy a smaller amount from a backup supplier.",
                    "w2_C_partial_substitute",
                    &[
                        "WHAT YOU DID: You sourced about a quarter of the delayed t-shirts from another vendor.",
                        "GOOD OUTCOMES: Better shelf availability than waiting; some sales protected.",
                        "TRADE-OFFS / RISKS: Higher cost per unit and possible quality differences (returns risk).",
                        "WHAT TO LOOK FOR IN CHARTS: Pie — Tops slice stabilizes; KPIs — COGS tick up, Profit may be flat to slightly down.",
                        "WHAT TO WATCH NEXT WEEK: Keep an eye on returns or reviews for those substitute units.",
                    ],
                    "Vendor diversification and quality risk management.",
                ),
            ],
        ),
        event(
            3,
            "w3_heat_wave_shorts",
            "Week 3 — Heat wave → shorts selling faster (Bottoms)",
            "Warmer-than-usual weather is pushing up demand for shorts for about two weeks. \
             Decide how to make the most of this bump without running out.",
            vec![
                choice(
                    "A",
                    "Boost online ads for shorts to catch extra demand.",
                    "w3_A_boost_demand_ads",
                    &[
                        "WHAT YOU DID: You increased marketing for shorts while demand is naturally higher.",
                        "GOOD OUTCOMES: More shoppers find shorts; you sell more units while the spike lasts.",
                        "TRADE-OFFS / RISKS: Marketing spend rises; if stock runs tight, ads can waste spend.",
                        "WHAT TO LOOK FOR IN CHARTS: Pie — Bottoms slice gets bigger; Compact — Quantity up, Marketing $ up; KPIs — Revenue up, Profit up if margin holds.",
                        "WHAT TO WATCH NEXT WEEK: Watch inventory for stockout risk; consider moving stock between stores.",
                    ],
                    "Right-time promotion vs. stock availability; ROAS thinking.",
                ),
                choice(
                    "B",
                    "Limit shorts to 3 per customer to spread stock.",
                    "w3_B_limit_per_customer",
                    &[
                        "WHAT YOU DID: You set a fair-purchase limit so more shoppers can find shorts.",
                        "GOOD OUTCOMES: Fewer stockouts; steadier on-shelf presence.",
                        "TRADE-OFFS / RISKS: Slightly fewer total units sold; some customers might dislike limits.",
                        "WHAT TO LOOK FOR IN CHARTS: Compact — Quantity dips a little vs. ads; Inventory holds up better; KPIs — Profit steady to slightly lower.",
                        "WHAT TO WATCH NEXT WEEK: Check sentiment; if supply improves, remove limits quickly.",
                    ],
                    "Customer equity vs. pure revenue maximization.",
                ),
                choice(
                    "C",
                    "Shift extra shorts from slow stores to hot stores.",
                    "w3_C_crossdock",
                    &[
                        "WHAT YOU DID: You moved inventory from where it's not selling to where it is.",
                        "GOOD OUTCOMES: Better match of stock to demand; more sales where needed.",
                        "TRADE-OFFS / RISKS: Small transfer cost and coordination work.",
                        "WHAT TO LOOK FOR IN CHARTS: Compact — Quantity up; Inventory down in hot areas; KPIs — Profit up slightly; COGS & costs up just a touch.",
                        "WHAT TO WATCH NEXT WEEK: If heat persists, keep transfers going; if not, stop to avoid over-handling.",
                    ],
                    "Network rebalancing under local demand spikes.",
                ),
            ],
        ),
        event(
            4,
            "w4_linen_returns",
            "Week 4 — A batch of linen shirts is getting returned (Tops subset)",
            "Shoppers report stitching problems on a specific batch of linen shirts. \
             You need to protect the brand and avoid throwing away margin.",
            vec![
                choice(
                    "A",
                    "Pull the batch, fix quality, and re-release slowly.",
                    "w4_A_rework_quality",
                    &[
                        "WHAT YOU DID: You took the affected shirts off the floor to repair them before selling again.",
                        "GOOD OUTCOMES: Protects brand trust; future returns drop.",
                        "TRADE-OFFS / RISKS: Extra labor cost now; slower revenue this week.",
                        "WHAT TO LOOK FOR IN CHARTS: Compact — Inventory dips a bit, Profit soft; KPIs — GM% stable (no heavy discounting).",
                        "WHAT TO WATCH NEXT WEEK: Confirm return rates normalize; watch customer reviews rebound.",
                    ],
                    "Short-term pain to avoid long-term reputation damage.",
                ),
                choice(
                    "B",
                    "Put that batch on deep discount and clear it fast.",
                    "w4_B_clearance",
                    &[
                        "WHAT YOU DID: You discounted heavily to sell through quickly and move on.",
                        "GOOD OUTCOMES: Clears the issue and frees up space; fewer complaints later.",
                        "TRADE-OFFS / RISKS: Big margin hit on those units.",
                        "WHAT TO LOOK FOR IN CHARTS: Pie — Tops may grow in units; KPIs — Revenue may rise but GM% drops; Compact — Quantity up, Profit down.",
                        "WHAT TO WATCH NEXT WEEK: Replace that space with reliable items; make sure staff can explain the markdown story.",
                    ],
                    "Cash recovery and speed vs. gross margin.",
                ),
                choice(
                    "C",
                    "Ask the supplier for a credit; pause reorders for now.",
                    "w4_C_credit_pause",
                    &[
                        "WHAT YOU DID: You recovered part of your cost via supplier credit and held off future buys.",
                        "GOOD OUTCOMES: Better cash position; motivates supplier to fix the issue.",
                        "TRADE-OFFS / RISKS: Fewer shirts on hand; possible short-term gaps in Tops choices.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — COGS down a bit, inventory down; Compact — Quantity may dip; Profit could hold if credit offsets.",
                        "WHAT TO WATCH NEXT WEEK: Monitor availability; re-open POs once quality is confirmed.",
                    ],
                    "Vendor accountability and cash protection.",
                ),
            ],
        ),
        event(
            5,
            "w5_cotton_cost_spike",
            "Week 5 — Cotton costs jump for incoming items",
            "A rise in cotton prices means some incoming Tops and Bottoms will cost more to buy. \
             Choose how to protect margin without scaring off customers.",
            vec![
                choice(
                    "A",
                    "Hedge about half your exposure (pay a small fee to stabilize cost).",
                    "w5_A_hedge",
                    &[
                        "WHAT YOU DID: You paid a fee to smooth out cost increases for about half of affected items.",
                        "GOOD OUTCOMES: More predictable costs; fewer surprises to margin.",
                        "TRADE-OFFS / RISKS: The fee slightly reduces profit even if costs fall later.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — COGS up modestly vs. full spike; Profit steadier than no hedge; Compact — Profit line less bumpy.",
                        "WHAT TO WATCH NEXT WEEK: Re-check the fee vs. benefit if cotton prices move again.",
                    ],
                    "Risk reduction vs. carrying the fee.",
                ),
                choice(
                    "B",
                    "Raise prices a little (protect margin, keep key value items flat).",
                    "w5_B_price_up",
                    &[
                        "WHAT YOU DID: You raised prices a bit on most affected items, but kept key price points unchanged.",
                        "GOOD OUTCOMES: Margin dollars protected on many items; revenue can hold up.",
                        "TRADE-OFFS / RISKS: Some shoppers buy slightly less; units dip a little.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — Sales Revenue OK, Profit OK; Compact — Quantity edges down; GM$ stable or up slightly.",
                        "WHAT TO WATCH NEXT WEEK: Watch demand for pushback; roll back if sensitivity is higher than expected.",
                    ],
                    "Price elasticity and key-value item strategy.",
                ),
                choice(
                    "C",
                    "Use more blended fabrics in place of pure cotton for some items.",
                    "w5_C_blend_substitute",
                    &[
                        "WHAT YOU DID: You switched part of the assortment to blends to lower cost pressure.",
                        "GOOD OUTCOMES: Costs rise less than a full cotton spike; margin pressure softens.",
                        "TRADE-OFFS / RISKS: Slight quality-perception risk; possible small increase in returns.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — COGS up only a little; Profit steadier; Compact — Quantity nearly flat; Pie — minor mix changes.",
                        "WHAT TO WATCH NEXT WEEK: Monitor reviews and returns; adjust blends if customers push back.",
                    ],
                    "Cost/quality/brand balance and customer perception.",
                ),
            ],
        ),
        event(
            6,
            "w6_dc_labor_shortage",
            "Week 6 — Warehouse short-staffed → slower shipping out to stores",
            "Your distribution center is short on labor, slowing shipments to stores. \
             Decide how to protect shelf availability and sales service levels.",
            vec![
                choice(
                    "A",
                    "Hire temporary help for about 6 weeks.",
                    "w6_A_temp_staff",
                    &[
                        "WHAT YOU DID: You added temporary staff to speed up outbound work.",
                        "GOOD OUTCOMES: Better on-time deliveries; fewer stockouts in stores.",
                        "TRADE-OFFS / RISKS: Higher operating cost this month.",
                        "WHAT TO LOOK FOR IN CHARTS: Compact — Quantity improves; KPIs — Marketing/OpEx proxy up a bit, Profit should still benefit if sales lift beats added cost.",
                        "WHAT TO WATCH NEXT WEEK: If volume normalizes, scale temp help down quickly.",
                    ],
                    "Paying for service recovery vs. near-term OpEx.",
                ),
                choice(
                    "B",
                    "Prioritize your top-selling items; slower items wait.",
                    "w6_B_prioritize_top",
                    &[
                        "WHAT YOU DID: You focused limited capacity on your most popular items.",
                        "GOOD OUTCOMES: Best sellers stay in stock; top-line impact is protected.",
                        "TRADE-OFFS / RISKS: Long-tail items may be under-served; fairness across stores can suffer.",
                        "WHAT TO LOOK FOR IN CHARTS: Compact — Quantity holds or grows on top items; KPIs — Profit stable; some items' inventory may rise (waiting).",
                        "WHAT TO WATCH NEXT WEEK: Rotate priorities if star items change to avoid long-tail frustration.",
                    ],
                    "Allocation under constraint and equity across the network.",
                ),
                choice(
                    "C",
                    "Let suppliers ship a small set directly to customers (drop-ship).",
                    "w6_C_dropship",
                    &[
                        "WHAT YOU DID: You let suppliers ship certain items directly to customers.",
                        "GOOD OUTCOMES: Takes load off your warehouse; faster for those items.",
                        "TRADE-OFFS / RISKS: Per-unit shipping cost a bit higher; customer experience can vary by supplier.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — COGS/Costs inch up; Quantity modestly up; Compact — Profit up slightly if extra sales beat the cost.",
                        "WHAT TO WATCH NEXT WEEK: Track delivery times and customer feedback per supplier.",
                    ],
                    "Channel strategy: speed vs. cost and CX control.",
                ),
            ],
        ),
        event(
            7,
            "w7_competitor_omni_promo",
            "Week 7 — A competitor launches a big sale across similar items",
            "A competitor is running a broad promotion that overlaps with your Tops/Bottoms/Accessories. \
             Choose how to defend your customers and margin.",
            vec![
                choice(
                    "A",
                    "Run selective discounts + extra loyalty points on key items.",
                    "w7_A_counter_promo",
                    &[
                        "WHAT YOU DID: You matched in a focused way on a few items and rewarded loyal customers.",
                        "GOOD OUTCOMES: Keeps shoppers from switching; unit sales rise on targeted SKUs.",
                        "TRADE-OFFS / RISKS: Margin % gets slimmer on those SKUs; watch discount creep.",
                        "WHAT TO LOOK FOR IN CHARTS: Pie — Targeted categories gain share; KPIs — Revenue up, GM% down a bit; Compact — Quantity up, Profit depends on discount depth.",
                        "WHAT TO WATCH NEXT WEEK: Turn off promos quickly where they're not needed; check loyalty repeat rate.",
                    ],
                    "Defensive pricing, loyalty lift, and promo discipline.",
                ),
                choice(
                    "B",
                    "Stand out with a small premium collection; cut weak sellers.",
                    "w7_B_differentiate",
                    &[
                        "WHAT YOU DID: You leaned into premium choices and trimmed slow SKUs to focus your offer.",
                        "GOOD OUTCOMES: Stronger brand feel; higher average price can support profit dollars.",
                        "TRADE-OFFS / RISKS: Fewer total units sold in the short term; needs good storytelling.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — Unit price up, GM$ stable or better; Compact — Revenue may hold with fewer units; Pie — mix shifts to categories like Outerwear/Shoes/Dresses.",
                        "WHAT TO WATCH NEXT WEEK: Watch reviews and sell-through; refresh the tail again if needed.",
                    ],
                    "Assortment curation and value perception.",
                ),
                choice(
                    "C",
                    "Focus on the experience (events, staff styling, micro-influencers).",
                    "w7_C_experience_led",
                    &[
                        "WHAT YOU DID: You invested in events and social buzz instead of heavy discounts.",
                        "GOOD OUTCOMES: More traffic and engagement; less pressure on prices.",
                        "TRADE-OFFS / RISKS: Marketing spend and benefits may take 2–3 weeks to fully show up.",
                        "WHAT TO LOOK FOR IN CHARTS: KPIs — Marketing $ up; Quantity up modestly; Compact — Profit grows gradually if traffic converts.",
                        "WHAT TO WATCH NEXT WEEK: Track conversion and basket size; stay consistent so momentum builds.",
                    ],
                    "Brand-building vs. immediate promo payback.",
                ),
            ],
        ),
    ]
}
