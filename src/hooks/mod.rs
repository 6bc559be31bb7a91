pub mod use_auto_reply;
pub mod use_campaigns;
pub mod use_dashboard;
pub mod use_history;
pub mod use_resource;
pub mod use_rich_menu;
pub mod use_segments;
pub mod use_session;
pub mod use_templates;

pub use use_auto_reply::{use_auto_reply_rules, UseAutoReplyRulesHandle};
pub use use_campaigns::{use_campaigns, UseCampaignsHandle};
pub use use_dashboard::{use_dashboard_stats, UseDashboardStatsHandle};
pub use use_history::{use_history, UseHistoryHandle};
pub use use_resource::{use_resource, UseResourceHandle};
pub use use_rich_menu::{use_rich_menus, UseRichMenusHandle};
pub use use_segments::{use_segments, UseSegmentsHandle};
pub use use_session::{use_session, UseSessionHandle};
pub use use_templates::{use_templates, UseTemplatesHandle};
