//! Trust propagation in social networks.

mod social_network;
pub use social_network::SocialNetwork;
pub use social_network::TrustError;
pub use social_network::TrustOperator;
pub use social_network::TrustRelation;
