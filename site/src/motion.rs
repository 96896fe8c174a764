//! Entrance and scroll motion.
//!
//! The pages are static HTML, so motion is declared on the markup and played
//! by [`MOTION_SCRIPT`]:
//!
//! - `data-reveal="once"` on a container keeps it at zero opacity until it
//!   first intersects the viewport. Its `data-reveal-item` children then fade
//!   in one after another using the delay written into their inline style.
//!   The observer unregisters the container after the first hit.
//! - `data-parallax-speed` on a wrapper offsets it against the scroll position.
//!
//! Without the script (or with `prefers-reduced-motion`) everything is shown
//! immediately; see the `.reveal` rules in [`crate::styles::SITE_CSS`].

/// Timing of a staggered reveal, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    /// Wait before the first child starts
    pub delay_children: f64,
    /// Extra wait for every following child
    pub stagger_children: f64,
}

impl RevealTransition {
    /// The todo-list timing: 0.15s before the first item, then 0.05s per item.
    pub const TODO_ITEMS: RevealTransition = RevealTransition {
        delay_children: 0.15,
        stagger_children: 0.05,
    };

    /// Delay of the child at `index` (zero-based, document order).
    pub fn item_delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }

    /// Inline style for the child at `index`.
    pub fn item_style(&self, index: usize) -> String {
        format!("transition-delay: {:.2}s", self.item_delay(index))
    }
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self::TODO_ITEMS
    }
}

/// Parallax factor of the hackathon landing block.
pub const LANDING_PARALLAX_SPEED: i32 = 5;

/// One-shot reveal and parallax behavior.
pub const MOTION_SCRIPT: &str = r#"
(() => {
  const reduced = window.matchMedia('(prefers-reduced-motion: reduce)').matches;

  // 1. One-shot reveal
  const reveal = (el) => el.classList.add('revealed');
  const containers = document.querySelectorAll('[data-reveal="once"]');
  if (reduced || !('IntersectionObserver' in window)) {
    containers.forEach(reveal);
  } else {
    const observer = new IntersectionObserver((entries) => {
      entries.forEach(entry => {
        if (!entry.isIntersecting) return;
        reveal(entry.target);
        observer.unobserve(entry.target);
      });
    }, { threshold: 0.1 });
    containers.forEach(el => {
      el.classList.add('reveal-armed');
      observer.observe(el);
    });
  }

  // 2. Parallax
  if (reduced) return;
  const layers = Array.from(document.querySelectorAll('[data-parallax-speed]'));
  if (layers.length === 0) return;
  let ticking = false;
  const update = () => {
    const y = window.scrollY;
    layers.forEach(el => {
      const speed = parseFloat(el.dataset.parallaxSpeed) || 0;
      el.style.transform = `translate3d(0, ${(y * speed) / 10}px, 0)`;
    });
    ticking = false;
  };
  window.addEventListener('scroll', () => {
    if (!ticking) {
      ticking = true;
      window.requestAnimationFrame(update);
    }
  }, { passive: true });
  update();
})();
"#;
