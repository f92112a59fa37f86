//! Fixed marketing content rendered on the landing page.

use super::entities::{FaqEntry, Feature, FooterColumn, NavSection, PricingTier, Testimonial};

pub const PRODUCT_NAME: &str = "InvoiceAI";
pub const TAGLINE: &str = "The smart way to create, send, and track professional invoices.";

pub fn nav_sections() -> Vec<NavSection> {
  vec![
    NavSection {
      anchor: "features",
      label: "Features",
      in_navbar: true,
    },
    NavSection {
      anchor: "demo",
      label: "Demo",
      in_navbar: true,
    },
    NavSection {
      anchor: "testimonials",
      label: "Testimonials",
      in_navbar: true,
    },
    NavSection {
      anchor: "pricing",
      label: "Pricing",
      in_navbar: true,
    },
    // Reached through the "Get Started" call to action
    NavSection {
      anchor: "contact",
      label: "Contact",
      in_navbar: false,
    },
  ]
}

pub fn features() -> Vec<Feature> {
  vec![
    Feature {
      icon: "file-text",
      title: "Beautiful Templates",
      description: "Choose from dozens of professionally designed templates that make your invoices stand out.",
    },
    Feature {
      icon: "credit-card",
      title: "Multiple Payment Options",
      description: "Accept payments via credit card, PayPal, bank transfer, and more with automatic reconciliation.",
    },
    Feature {
      icon: "users",
      title: "Client Management",
      description: "Store client information securely and access it instantly when creating new invoices.",
    },
    Feature {
      icon: "message-square",
      title: "Automated Reminders",
      description: "Set up automatic payment reminders to reduce late payments and improve cash flow.",
    },
    Feature {
      icon: "download",
      title: "Export & Download",
      description: "Export invoices as PDF, CSV, or Excel files with a single click for your records.",
    },
    Feature {
      icon: "mail",
      title: "Email Integration",
      description: "Send professional invoices directly from the platform with customizable email templates.",
    },
  ]
}

pub fn testimonials() -> Vec<Testimonial> {
  vec![
    Testimonial {
      name: "Sarah Johnson",
      role: "Marketing Director",
      content: "This invoice generator has completely transformed our billing process. It's intuitive, fast, and the templates look incredibly professional.",
      rating: 5,
    },
    Testimonial {
      name: "Michael Chen",
      role: "Freelance Designer",
      content: "As a freelancer, keeping track of invoices was always a pain. This tool has saved me countless hours and helped me get paid faster.",
      rating: 5,
    },
    Testimonial {
      name: "Emily Rodriguez",
      role: "Small Business Owner",
      content: "The automated reminders and payment tracking features are game-changers. My cash flow has improved significantly since using this platform.",
      rating: 4,
    },
  ]
}

pub fn pricing_tiers() -> Vec<PricingTier> {
  vec![
    PricingTier {
      title: "Starter",
      price: "Free",
      description: "Perfect for freelancers just getting started",
      features: &[
        "Up to 5 invoices per month",
        "Basic invoice templates",
        "Email support",
        "PDF downloads",
        "Client management",
      ],
      highlighted: false,
    },
    PricingTier {
      title: "Professional",
      price: "$29",
      description: "Ideal for growing businesses",
      features: &[
        "Unlimited invoices",
        "Premium templates",
        "Automated reminders",
        "Multiple payment options",
        "Priority support",
        "Analytics dashboard",
      ],
      highlighted: true,
    },
    PricingTier {
      title: "Enterprise",
      price: "$99",
      description: "For established businesses with complex needs",
      features: &[
        "Everything in Professional",
        "Custom branding",
        "Team accounts",
        "API access",
        "Dedicated account manager",
        "Advanced reporting",
        "Custom integrations",
      ],
      highlighted: false,
    },
  ]
}

pub fn faq() -> Vec<FaqEntry> {
  vec![
    FaqEntry {
      question: "How secure is my data?",
      answer: "Your data is encrypted end-to-end and stored on secure servers. We follow industry best practices for data protection.",
    },
    FaqEntry {
      question: "Can I customize invoice templates?",
      answer: "Yes, all paid plans include the ability to customize templates with your logo, colors, and branding elements.",
    },
    FaqEntry {
      question: "Do you offer a free trial?",
      answer: "Yes, you can try our Professional plan free for 14 days, no credit card required.",
    },
    FaqEntry {
      question: "How do I get started?",
      answer: "Simply sign up for an account, choose your plan, and you can start creating invoices immediately.",
    },
  ]
}

pub fn footer_columns() -> Vec<FooterColumn> {
  vec![
    FooterColumn {
      heading: "Product",
      links: &["Features", "Pricing", "Testimonials", "FAQ"],
    },
    FooterColumn {
      heading: "Company",
      links: &["About", "Blog", "Careers", "Contact"],
    },
    FooterColumn {
      heading: "Legal",
      links: &["Privacy Policy", "Terms of Service", "Cookie Policy", "GDPR"],
    },
  ]
}
