mod state;
mod view;

pub use state::ProposalSession;
pub use view::SessionView;
