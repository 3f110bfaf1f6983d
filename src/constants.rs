/// User agent string sent with every request to the content API
pub const USER_AGENT: &str = "edu-cms-client/0.3.0";
/// Default base URL for the REST API when `API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Query parameter appended to read requests to defeat intermediary caches
pub const CACHE_BUST_PARAM: &str = "_t";
/// Endpoints whose path contains this fragment are never cache-busted
pub const CACHE_BUST_EXEMPT_FRAGMENT: &str = "status";
/// Error code the backend puts in a 401 body when the bearer token has expired
pub const TOKEN_EXPIRED_CODE: &str = "TOKEN_EXPIRED";
/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Login endpoint
pub const LOGIN_PATH: &str = "auth/login";
/// Token refresh endpoint
pub const REFRESH_PATH: &str = "auth/refresh";
/// Token verification endpoint
pub const VERIFY_PATH: &str = "auth/verify";
/// Password change endpoint
pub const CHANGE_PASSWORD_PATH: &str = "auth/change-password";

/// Store key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Store key holding the authentication flag
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Store key holding the JSON-encoded user record
pub const USER_KEY: &str = "user";
/// Store key holding the Unix time the token was obtained
pub const ISSUED_AT_KEY: &str = "tokenIssuedAt";

/// Draft store key for the hero section
pub const HERO_DRAFT_KEY: &str = "heroContent";
/// Draft store key for the countries list
pub const COUNTRIES_DRAFT_KEY: &str = "countries";
/// Draft store key for the testimonials list
pub const TESTIMONIALS_DRAFT_KEY: &str = "testimonials";
/// Draft store key for site-wide SEO metadata
pub const SEO_DRAFT_KEY: &str = "seoSettings";

/// Capacity of the auth event broadcast channel
pub const AUTH_EVENT_CAPACITY: usize = 16;
/// Default number of blog previews shown on the landing page
pub const DEFAULT_PREVIEW_LIMIT: u32 = 3;
