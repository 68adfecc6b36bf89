// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

// Section 3.4, 3.6 - Components
pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";

// Section 3.2 - Property Parameters
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
pub const KW_DATE: &str = "DATE";

// Section 3.7 - Calendar Properties
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DTEND: &str = "DTEND";

// Section 3.8.4 - Relationship Component Properties
pub const KW_UID: &str = "UID";

// Section 3.8.7 - Change Management Component Properties
pub const KW_DTSTAMP: &str = "DTSTAMP";
