// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const HOVER_TICK_INCREMENT: f32 = 0.1;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Section reveals (snappier than the menu slide)
pub const REVEAL_STIFFNESS: f32 = 0.15;
pub const REVEAL_DAMPING: f32 = 0.70;
pub const REVEAL_RISE_DISTANCE: f32 = 24.0;
pub const SECTION_STAGGER_MS: f32 = 200.0;

// Loading overlay
pub const LOADING_HOLD_MS: f32 = 1500.0;
pub const LOADING_FADE_MS: f32 = 500.0;
pub const LOADING_SPINNER_SIZE: f32 = 28.0;

// Contact form
pub const SUBMIT_DELAY_MS: u64 = 2000;

// Scroll behavior
pub const PARALLAX_SPEED: f32 = 0.5;
pub const SECTION_REVEAL_MARGIN: f32 = 120.0;
pub const EDUCATION_REVEAL_MARGIN: f32 = 160.0;

// Initial window
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Page layout; smooth-scroll targets derive from these fixed heights
pub const HERO_HEIGHT: f32 = 680.0;
pub const SECTION_HEIGHT: f32 = 560.0;
pub const EDUCATION_ITEM_BASE: f32 = 120.0;
pub const EDUCATION_ITEM_SPACING: f32 = 110.0;

// UI dimensions
pub const CONTENT_MAX_WIDTH: f32 = 920.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const INPUT_BORDER_RADIUS: f32 = 8.0;
pub const PROJECT_CARD_WIDTH: f32 = 280.0;
pub const PROJECT_CARD_HEIGHT: f32 = 210.0;
pub const NAV_PANEL_WIDTH: f32 = 320.0;
pub const TOAST_MAX_WIDTH: f32 = 420.0;
