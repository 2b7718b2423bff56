//! Wire DTOs for the REST API, shared with the server through `payloads`.

pub use payloads::leaderboard::{LeaderboardRow, rank_by_total_solved};
pub use payloads::{
    ApiErrorBody, Credentials, FollowingResponse, LeetcodeStats, LeetcodeUsernameRequest, LoginResponse,
    ProfileResponse, SuccessResponse,
};
