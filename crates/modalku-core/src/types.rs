//! # Domain Types
//!
//! The business scenario a user fills in on the calculator form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BusinessScenario (root)                           │
//! │                                                                         │
//! │  business_name                                                          │
//! │  revenue: Option<RevenueModel>                                          │
//! │     ├── Ticket(TicketBasedRevenue)     avg ticket × tickets/day         │
//! │     └── Quantity(QuantityBasedRevenue) unit price × units/day           │
//! │                                                                         │
//! │  ┌────────────────┐ ┌────────────────┐ ┌──────────────┐ ┌────────────┐ │
//! │  │ PropertyCost   │ │ CapitalExpense │ │ InventoryItem│ │ Operational│ │
//! │  │ monthly_rent   │ │ unit_price     │ │ unit_price   │ │ monthly_   │ │
//! │  │ × qty × 12     │ │ × qty          │ │ × qty        │ │ cost × qty │ │
//! │  │ = annual_rent  │ │ = total_cost   │ │ = total_cost │ │ = total    │ │
//! │  └────────────────┘ └────────────────┘ └──────────────┘ └────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money
//! Amounts are plain `f64` rupiah. The calculator reports an infinite payback
//! period for unprofitable plans and NaN shares for an empty investment, so
//! IEEE-754 special values are part of the contract.
//!
//! ## Derived Fields
//! `annual_rent`, `total_cost` and the revenue figures are outputs. They are
//! accepted on input (the form echoes them back) but never read by the
//! engine; every call recomputes them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;

// =============================================================================
// Categories
// =============================================================================

/// Category of a rented place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PropertyCategory {
    #[serde(rename = "Sewa Lahan/Tempat")]
    LandOrPlace,
    #[serde(rename = "Sewa Kios")]
    Kiosk,
    #[default]
    #[serde(rename = "Lainnya")]
    Other,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 3] = [Self::LandOrPlace, Self::Kiosk, Self::Other];

    /// Label shown in the form's select box.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LandOrPlace => "Sewa Lahan/Tempat",
            Self::Kiosk => "Sewa Kios",
            Self::Other => "Lainnya",
        }
    }
}

/// Category of a one-off capital purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CapexCategory {
    #[serde(rename = "Peralatan - Mesin")]
    Machinery,
    #[serde(rename = "Peralatan - Lain2")]
    OtherEquipment,
    #[serde(rename = "Peralatan - Dapur")]
    KitchenEquipment,
    #[serde(rename = "Peralatan - Kantor")]
    OfficeEquipment,
    #[serde(rename = "Furniture")]
    Furniture,
    #[serde(rename = "Renovasi/Desain Interior")]
    Renovation,
    #[serde(rename = "Sistem Software")]
    Software,
    #[serde(rename = "Lisensi & Legalitas")]
    Licensing,
    #[default]
    #[serde(rename = "Lainnya")]
    Other,
}

impl CapexCategory {
    pub const ALL: [CapexCategory; 9] = [
        Self::Machinery,
        Self::OtherEquipment,
        Self::KitchenEquipment,
        Self::OfficeEquipment,
        Self::Furniture,
        Self::Renovation,
        Self::Software,
        Self::Licensing,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Machinery => "Peralatan - Mesin",
            Self::OtherEquipment => "Peralatan - Lain2",
            Self::KitchenEquipment => "Peralatan - Dapur",
            Self::OfficeEquipment => "Peralatan - Kantor",
            Self::Furniture => "Furniture",
            Self::Renovation => "Renovasi/Desain Interior",
            Self::Software => "Sistem Software",
            Self::Licensing => "Lisensi & Legalitas",
            Self::Other => "Lainnya",
        }
    }
}

/// Category of opening stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InventoryCategory {
    #[serde(rename = "Bahan Baku")]
    RawMaterials,
    #[serde(rename = "Persediaan")]
    Supplies,
    #[default]
    #[serde(rename = "Lainnya")]
    Other,
}

impl InventoryCategory {
    pub const ALL: [InventoryCategory; 3] = [Self::RawMaterials, Self::Supplies, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RawMaterials => "Bahan Baku",
            Self::Supplies => "Persediaan",
            Self::Other => "Lainnya",
        }
    }
}

/// Category of a recurring monthly cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OperationalCategory {
    #[serde(rename = "Gaji Karyawan")]
    Salaries,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Utilitas (Listrik, Air, Gas)")]
    Utilities,
    #[serde(rename = "Internet & Telepon")]
    InternetAndPhone,
    #[serde(rename = "Transportasi")]
    Transportation,
    #[serde(rename = "Sewa Tambahan")]
    AdditionalRent,
    #[serde(rename = "Pajak & Asuransi")]
    TaxesAndInsurance,
    #[default]
    #[serde(rename = "Lainnya")]
    Other,
}

impl OperationalCategory {
    pub const ALL: [OperationalCategory; 8] = [
        Self::Salaries,
        Self::Marketing,
        Self::Utilities,
        Self::InternetAndPhone,
        Self::Transportation,
        Self::AdditionalRent,
        Self::TaxesAndInsurance,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salaries => "Gaji Karyawan",
            Self::Marketing => "Marketing",
            Self::Utilities => "Utilitas (Listrik, Air, Gas)",
            Self::InternetAndPhone => "Internet & Telepon",
            Self::Transportation => "Transportasi",
            Self::AdditionalRent => "Sewa Tambahan",
            Self::TaxesAndInsurance => "Pajak & Asuransi",
            Self::Other => "Lainnya",
        }
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Property Cost
// =============================================================================

/// A rented location, priced per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCost {
    /// Unique within the property list.
    pub id: String,

    #[serde(default)]
    pub category: PropertyCategory,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub monthly_rent: f64,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: String,

    /// monthly_rent × quantity × 12 (derived).
    #[serde(default)]
    pub annual_rent: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl PropertyCost {
    /// Creates a blank row the way the form adds one: fresh id, zero rent,
    /// quantity 1.
    pub fn new(category: PropertyCategory, location: impl Into<String>, unit: impl Into<String>) -> Self {
        PropertyCost {
            id: new_item_id(),
            category,
            location: location.into(),
            monthly_rent: 0.0,
            quantity: 1.0,
            unit: unit.into(),
            annual_rent: None,
            notes: None,
        }
    }

    /// Sets the monthly rent (builder style).
    pub fn with_monthly_rent(mut self, monthly_rent: f64) -> Self {
        self.monthly_rent = monthly_rent;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }
}

// =============================================================================
// Capital Expense
// =============================================================================

/// A one-off purchase needed before opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CapitalExpense {
    pub id: String,

    #[serde(default)]
    pub category: CapexCategory,

    #[serde(default)]
    pub item: String,

    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: String,

    /// unit_price × quantity (derived).
    #[serde(default)]
    pub total_cost: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CapitalExpense {
    pub fn new(category: CapexCategory, item: impl Into<String>, unit: impl Into<String>) -> Self {
        CapitalExpense {
            id: new_item_id(),
            category,
            item: item.into(),
            unit_price: 0.0,
            quantity: 1.0,
            unit: unit.into(),
            total_cost: None,
            notes: None,
        }
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// Opening stock bought before the first sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,

    #[serde(default)]
    pub category: InventoryCategory,

    #[serde(default)]
    pub item: String,

    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: String,

    /// unit_price × quantity (derived).
    #[serde(default)]
    pub total_cost: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryItem {
    pub fn new(category: InventoryCategory, item: impl Into<String>, unit: impl Into<String>) -> Self {
        InventoryItem {
            id: new_item_id(),
            category,
            item: item.into(),
            unit_price: 0.0,
            quantity: 1.0,
            unit: unit.into(),
            total_cost: None,
            notes: None,
        }
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }
}

// =============================================================================
// Operational Cost
// =============================================================================

/// A recurring monthly expense (salaries, utilities, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OperationalCost {
    pub id: String,

    #[serde(default)]
    pub category: OperationalCategory,

    #[serde(default)]
    pub item: String,

    #[serde(default)]
    pub monthly_cost: f64,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: String,

    /// monthly_cost × quantity (derived).
    #[serde(default)]
    pub total_cost: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl OperationalCost {
    pub fn new(category: OperationalCategory, item: impl Into<String>, unit: impl Into<String>) -> Self {
        OperationalCost {
            id: new_item_id(),
            category,
            item: item.into(),
            monthly_cost: 0.0,
            quantity: 1.0,
            unit: unit.into(),
            total_cost: None,
            notes: None,
        }
    }

    pub fn with_monthly_cost(mut self, monthly_cost: f64) -> Self {
        self.monthly_cost = monthly_cost;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }
}

// =============================================================================
// Revenue Models
// =============================================================================

/// Revenue driven by average basket size × number of transactions.
///
/// Suits businesses selling many different products or services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketBasedRevenue {
    #[serde(default)]
    pub average_ticket_size: f64,

    #[serde(default)]
    pub daily_tickets: f64,

    /// Merchant discount rate, 0-100.
    #[serde(default)]
    pub mdr_percentage: f64,

    /// Cost of goods sold as a share of revenue, 0-100.
    #[serde(default)]
    pub cogs_percentage: f64,

    #[serde(default)]
    pub daily_revenue: Option<f64>,

    #[serde(default)]
    pub monthly_revenue: Option<f64>,

    #[serde(default)]
    pub total_transaction_fee: Option<f64>,

    #[serde(default)]
    pub total_raw_materials: Option<f64>,
}

/// Revenue driven by unit price × units sold.
///
/// Suits single-product businesses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuantityBasedRevenue {
    #[serde(default)]
    pub unit_price: f64,

    #[serde(default)]
    pub daily_quantity: f64,

    #[serde(default)]
    pub mdr_percentage: f64,

    #[serde(default)]
    pub cogs_percentage: f64,

    #[serde(default)]
    pub daily_revenue: Option<f64>,

    #[serde(default)]
    pub monthly_revenue: Option<f64>,

    #[serde(default)]
    pub total_transaction_fee: Option<f64>,

    #[serde(default)]
    pub total_raw_materials: Option<f64>,
}

/// Which revenue model the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    #[default]
    Ticket,
    Quantity,
}

impl BusinessModel {
    /// Label shown in the business model select box.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessModel::Ticket => "Ticket-based (cocok untuk bisnis banyak produk/jasa)",
            BusinessModel::Quantity => "Quantity-based (cocok untuk bisnis dengan 1 produk/jasa)",
        }
    }
}

impl std::fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessModel::Ticket => write!(f, "ticket"),
            BusinessModel::Quantity => write!(f, "quantity"),
        }
    }
}

/// The active revenue model. Exactly one variant is ever set.
///
/// ## Wire Format
/// ```json
/// { "businessModel": "ticket", "averageTicketSize": 100000, "dailyTickets": 20,
///   "mdrPercentage": 2, "cogsPercentage": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "businessModel", rename_all = "snake_case")]
pub enum RevenueModel {
    Ticket(TicketBasedRevenue),
    Quantity(QuantityBasedRevenue),
}

impl RevenueModel {
    pub fn business_model(&self) -> BusinessModel {
        match self {
            RevenueModel::Ticket(_) => BusinessModel::Ticket,
            RevenueModel::Quantity(_) => BusinessModel::Quantity,
        }
    }

    /// Price per transaction or per unit.
    pub fn rate(&self) -> f64 {
        match self {
            RevenueModel::Ticket(t) => t.average_ticket_size,
            RevenueModel::Quantity(q) => q.unit_price,
        }
    }

    /// Transactions or units per day.
    pub fn daily_count(&self) -> f64 {
        match self {
            RevenueModel::Ticket(t) => t.daily_tickets,
            RevenueModel::Quantity(q) => q.daily_quantity,
        }
    }

    pub fn mdr_percentage(&self) -> f64 {
        match self {
            RevenueModel::Ticket(t) => t.mdr_percentage,
            RevenueModel::Quantity(q) => q.mdr_percentage,
        }
    }

    pub fn cogs_percentage(&self) -> f64 {
        match self {
            RevenueModel::Ticket(t) => t.cogs_percentage,
            RevenueModel::Quantity(q) => q.cogs_percentage,
        }
    }
}

// =============================================================================
// Business Scenario
// =============================================================================

/// Everything the user entered for one business plan.
///
/// The engine only reads it; derived values come back in new values.
///
/// ## Accepted Payloads
/// Serialization always writes the tagged `revenue` object. Decoding also
/// accepts the flat form payload, where `businessModel` sits at the top
/// level next to both `ticketBasedRevenue` and `quantityBasedRevenue`; the
/// payload named by `businessModel` becomes [`BusinessScenario::revenue`].
/// A `revenue` object, when present, wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BusinessScenario {
    #[serde(default)]
    pub business_name: String,

    /// `None` when the model was declared but its parameters never filled.
    #[serde(default)]
    pub revenue: Option<RevenueModel>,

    #[serde(default)]
    pub property_costs: Vec<PropertyCost>,

    #[serde(default)]
    pub capital_expenses: Vec<CapitalExpense>,

    #[serde(default)]
    pub inventory: Vec<InventoryItem>,

    #[serde(default)]
    pub operational_costs: Vec<OperationalCost>,
}

/// Wire shape accepted by `BusinessScenario`'s `Deserialize` impl.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioPayload {
    #[serde(default)]
    business_name: String,

    #[serde(default)]
    revenue: Option<RevenueModel>,

    #[serde(default)]
    business_model: Option<BusinessModel>,

    #[serde(default)]
    ticket_based_revenue: Option<TicketBasedRevenue>,

    #[serde(default)]
    quantity_based_revenue: Option<QuantityBasedRevenue>,

    #[serde(default)]
    property_costs: Vec<PropertyCost>,

    #[serde(default)]
    capital_expenses: Vec<CapitalExpense>,

    #[serde(default)]
    inventory: Vec<InventoryItem>,

    #[serde(default)]
    operational_costs: Vec<OperationalCost>,
}

impl From<ScenarioPayload> for BusinessScenario {
    fn from(payload: ScenarioPayload) -> Self {
        let revenue = payload.revenue.or(match payload.business_model {
            Some(BusinessModel::Ticket) => payload.ticket_based_revenue.map(RevenueModel::Ticket),
            Some(BusinessModel::Quantity) => payload.quantity_based_revenue.map(RevenueModel::Quantity),
            None => None,
        });

        BusinessScenario {
            business_name: payload.business_name,
            revenue,
            property_costs: payload.property_costs,
            capital_expenses: payload.capital_expenses,
            inventory: payload.inventory,
            operational_costs: payload.operational_costs,
        }
    }
}

impl<'de> Deserialize<'de> for BusinessScenario {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ScenarioPayload::deserialize(deserializer).map(BusinessScenario::from)
    }
}

impl BusinessScenario {
    /// Creates an empty scenario.
    pub fn new(business_name: impl Into<String>) -> Self {
        BusinessScenario {
            business_name: business_name.into(),
            ..Default::default()
        }
    }

    /// Decodes the JSON payload posted by the calculator form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The declared business model, if any.
    pub fn business_model(&self) -> Option<BusinessModel> {
        self.revenue.as_ref().map(RevenueModel::business_model)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rows_start_blank() {
        let rent = PropertyCost::new(PropertyCategory::Kiosk, "Pasar Baru", "bulan");
        assert_eq!(rent.monthly_rent, 0.0);
        assert_eq!(rent.quantity, 1.0);
        assert!(rent.annual_rent.is_none());
        assert!(Uuid::parse_str(&rent.id).is_ok());

        let other = PropertyCost::new(PropertyCategory::Kiosk, "Pasar Baru", "bulan");
        assert_ne!(rent.id, other.id);
    }

    #[test]
    fn test_category_serializes_as_label() {
        for category in OperationalCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
        for category in CapexCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let item: CapitalExpense =
            serde_json::from_str(r#"{"id": "a1", "category": "Furniture"}"#).unwrap();
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.category, CapexCategory::Furniture);
    }

    #[test]
    fn test_revenue_model_is_tagged() {
        let json = r#"{
            "businessModel": "quantity",
            "unitPrice": 15000,
            "dailyQuantity": 40,
            "mdrPercentage": 0.7,
            "cogsPercentage": 35
        }"#;
        let model: RevenueModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.business_model(), BusinessModel::Quantity);
        assert_eq!(model.rate(), 15000.0);
        assert_eq!(model.daily_count(), 40.0);

        let back = serde_json::to_value(&model).unwrap();
        assert_eq!(back["businessModel"], "quantity");
    }

    #[test]
    fn test_scenario_from_json() {
        let json = r#"{
            "businessName": "Kopi Senja",
            "revenue": { "businessModel": "ticket", "averageTicketSize": 25000, "dailyTickets": 80 },
            "operationalCosts": [
                { "id": "op-1", "category": "Gaji Karyawan", "item": "Barista", "monthlyCost": 3500000, "quantity": 2, "unit": "orang" }
            ]
        }"#;
        let scenario = BusinessScenario::from_json(json).unwrap();
        assert_eq!(scenario.business_name, "Kopi Senja");
        assert_eq!(scenario.business_model(), Some(BusinessModel::Ticket));
        assert!(scenario.property_costs.is_empty());
        assert_eq!(scenario.operational_costs[0].category, OperationalCategory::Salaries);
    }

    #[test]
    fn test_scenario_from_flat_form_payload() {
        let json = r#"{
            "businessName": "Kopi Senja",
            "businessModel": "ticket",
            "ticketBasedRevenue": { "averageTicketSize": 100000, "dailyTickets": 20, "mdrPercentage": 2, "cogsPercentage": 30 },
            "quantityBasedRevenue": { "unitPrice": 5000, "dailyQuantity": 10 },
            "operationalCosts": [
                { "id": "op-1", "category": "Gaji Karyawan", "monthlyCost": 8000000, "quantity": 1 }
            ]
        }"#;
        let scenario = BusinessScenario::from_json(json).unwrap();
        assert_eq!(scenario.business_model(), Some(BusinessModel::Ticket));
        assert_eq!(scenario.revenue.as_ref().map(RevenueModel::rate), Some(100000.0));
        assert_eq!(scenario.revenue.as_ref().map(RevenueModel::daily_count), Some(20.0));

        let json = r#"{
            "businessModel": "quantity",
            "ticketBasedRevenue": { "averageTicketSize": 100000, "dailyTickets": 20 },
            "quantityBasedRevenue": { "unitPrice": 5000, "dailyQuantity": 10 }
        }"#;
        let scenario = BusinessScenario::from_json(json).unwrap();
        assert_eq!(scenario.business_model(), Some(BusinessModel::Quantity));
        assert_eq!(scenario.revenue.as_ref().map(RevenueModel::rate), Some(5000.0));
    }

    #[test]
    fn test_flat_payload_without_selected_parameters() {
        let json = r#"{ "businessModel": "quantity", "ticketBasedRevenue": { "averageTicketSize": 1 } }"#;
        let scenario = BusinessScenario::from_json(json).unwrap();
        assert!(scenario.revenue.is_none());
    }

    #[test]
    fn test_tagged_revenue_wins_over_flat_fields() {
        let json = r#"{
            "businessModel": "ticket",
            "ticketBasedRevenue": { "averageTicketSize": 1, "dailyTickets": 1 },
            "revenue": { "businessModel": "quantity", "unitPrice": 7000, "dailyQuantity": 3 }
        }"#;
        let scenario = BusinessScenario::from_json(json).unwrap();
        assert_eq!(scenario.business_model(), Some(BusinessModel::Quantity));
        assert_eq!(scenario.revenue.as_ref().map(RevenueModel::rate), Some(7000.0));
    }

    #[test]
    fn test_serialized_scenario_reads_back() {
        let scenario = BusinessScenario {
            business_name: "Es Kelapa".into(),
            revenue: Some(RevenueModel::Quantity(QuantityBasedRevenue {
                unit_price: 10_000.0,
                daily_quantity: 50.0,
                ..Default::default()
            })),
            ..Default::default()
        };
        let json = serde_json::to_string(&scenario).unwrap();
        assert_eq!(BusinessScenario::from_json(&json).unwrap(), scenario);
    }

    #[test]
    fn test_business_model_labels() {
        assert_eq!(BusinessModel::Ticket.to_string(), "ticket");
        assert_eq!(BusinessModel::Quantity.to_string(), "quantity");
        assert!(BusinessModel::Ticket.label().starts_with("Ticket-based"));
        assert!(BusinessModel::Quantity.label().starts_with("Quantity-based"));

        for model in [BusinessModel::Ticket, BusinessModel::Quantity] {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model));
        }
    }

    #[test]
    fn test_scenario_from_bad_json_is_error() {
        assert!(BusinessScenario::from_json("{\"propertyCosts\": 3}").is_err());
    }
}
