pub mod api;
pub mod auto_reply;
pub mod campaign;
pub mod dashboard;
pub mod history;
pub mod rich_menu;
pub mod segment;
pub mod session;
pub mod template;
pub mod validation;

pub use api::{ApiErrorBody, ApiResponse};
pub use auto_reply::{
    AutoReplyRule, AutoReplyRuleType, BulkUpdateRulesRequest, CreateAutoReplyRuleRequest,
    MatchType, RuleEnabledUpdate,
};
pub use campaign::{Campaign, CampaignStatus, CreateCampaignRequest, UpdateCampaignRequest};
pub use dashboard::DashboardStats;
pub use history::{MessageHistory, MessageHistoryStatus};
pub use rich_menu::{
    CreateRichMenuRequest, RichMenu, RichMenuAction, RichMenuActionType, RichMenuArea,
    RichMenuBounds, RichMenuSize, RichMenuTemplate,
};
pub use segment::Segment;
pub use session::SessionProfile;
pub use template::{CreateTemplateRequest, MessageTemplate};
pub use validation::ValidationError;
