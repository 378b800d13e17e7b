//! Committing a resolved navigation to a router.

use crate::instruction::NavigationInstruction;
use crate::router::Router;
use std::sync::Arc;

/// Separator used by [`NavigationContext::title`].
pub const DEFAULT_TITLE_SEPARATOR: &str = " | ";

/// One navigation of one router, with the navigations of its child routers.
#[derive(Debug)]
pub struct NavigationContext {
	router: Router,
	next_instruction: Arc<NavigationInstruction>,
	prev_instruction: Option<Arc<NavigationInstruction>>,
	children: Vec<NavigationContext>,
}

impl NavigationContext {
	/// Creates a context moving `router` to `instruction`.
	///
	/// The router's current instruction becomes the previous instruction.
	pub fn new(router: Router, instruction: NavigationInstruction) -> Self {
		let prev_instruction = router.current_instruction();
		Self {
			router,
			next_instruction: Arc::new(instruction),
			prev_instruction,
			children: Vec::new(),
		}
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn next_instruction(&self) -> &Arc<NavigationInstruction> {
		&self.next_instruction
	}

	pub fn prev_instruction(&self) -> Option<&Arc<NavigationInstruction>> {
		self.prev_instruction.as_ref()
	}

	/// Attaches the navigation of a child router.
	pub fn add_child(&mut self, child: NavigationContext) {
		self.children.push(child);
	}

	pub fn children(&self) -> &[NavigationContext] {
		&self.children
	}

	/// Makes the next instruction current.
	///
	/// The previous menu entry is deactivated before the next one is
	/// activated, so navigating to the same route leaves it active. The base
	/// URL and menu links are refreshed before child contexts commit, since
	/// children derive their base URL from this router.
	pub fn commit_changes(&self) {
		if let Some(nav_model) = self.prev_instruction.as_ref().and_then(|prev| prev.nav_model()) {
			nav_model.set_active(false);
		}
		if let Some(nav_model) = self.next_instruction.nav_model() {
			nav_model.set_active(true);
		}

		self.router
			.set_current_instruction(Arc::clone(&self.next_instruction));
		self.router.refresh_base_url();
		self.router.refresh_navigation();

		tracing::debug!(
			fragment = %self.next_instruction.fragment(),
			children = self.children.len(),
			"navigation committed"
		);

		for child in &self.children {
			child.commit_changes();
		}
	}

	/// Builds the document title with [`DEFAULT_TITLE_SEPARATOR`].
	pub fn title(&self) -> String {
		self.build_title(DEFAULT_TITLE_SEPARATOR)
	}

	/// Builds the document title.
	///
	/// Child titles come first, then this route's menu title, then the
	/// router's title. Empty parts are skipped.
	pub fn build_title(&self, separator: &str) -> String {
		let route_title = self
			.next_instruction
			.nav_model()
			.and_then(|nav_model| nav_model.title())
			.or_else(|| self.next_instruction.config().title.clone());

		let parts: Vec<String> = self
			.children
			.iter()
			.map(|child| child.build_title(separator))
			.chain(route_title)
			.chain(self.router.title())
			.filter(|part| !part.is_empty())
			.collect();

		parts.join(separator)
	}
}
