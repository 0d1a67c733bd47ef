//! Built-in example contract used by the "load sample" action

/// A deliberately one-sided freelance software development contract.
///
/// Line layout matters: the mock analyzer's line numbers point into it.
pub const SAMPLE_CONTRACT: &str = "SOFTWARE DEVELOPMENT CONTRACT

Between TechCorp LLC (\"Client\") and Independent Developer (\"Contractor\")

Article 1 - PURPOSE
The Contractor agrees to develop a web application according to the provided specifications.

Article 2 - DEADLINES AND DELIVERY
Delivery expected within 3 months. Any delay over 15 days incurs penalties of EUR 500/day.

Article 3 - COMPENSATION
Total amount: EUR 45,000 excl. tax
- 20% on signature
- 30% at mid-project
- 50% on final delivery
Payment within 90 days of invoicing.

Article 4 - INTELLECTUAL PROPERTY
All intellectual property rights transfer to the Client upon full payment.
The Contractor waives all moral rights to the work created.

Article 5 - LIABILITY
The Contractor is liable for all direct and indirect damages caused to the Client.
No limitation of liability is provided.

Article 6 - TERMINATION
The Client may terminate at any time without notice or compensation.
Upon termination, the Contractor must refund 50% of the sums received.

Article 7 - CONFIDENTIALITY
The Contractor agrees not to disclose any information for 10 years after the end of the contract.

Article 8 - NON-COMPETE CLAUSE
The Contractor shall not work for any competitor of the Client for 2 years.

Article 9 - JURISDICTION
Any dispute falls under the exclusive jurisdiction of the courts of Paris.";
