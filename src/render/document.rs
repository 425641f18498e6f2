//! Rendered HTML document
//!
//! The page is a fixed skeleton with named mount points; each mount point
//! holds the inner HTML of one container.

use crate::dashboard::Tab;
use crate::consts::cli_consts::text::LOADING;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::HashMap;

/// Elements whose content is replaced on every load.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MountPoint {
    UsersTbody,
    UsersList,
    SelectedUserName,
    WheelsList,
    StatisticsContent,
    ModalTitle,
    ModalData,
}

impl MountPoint {
    pub const ALL: [MountPoint; 7] = [
        MountPoint::UsersTbody,
        MountPoint::UsersList,
        MountPoint::SelectedUserName,
        MountPoint::WheelsList,
        MountPoint::StatisticsContent,
        MountPoint::ModalTitle,
        MountPoint::ModalData,
    ];

    /// Element id in the page.
    pub fn id(&self) -> &'static str {
        match self {
            MountPoint::UsersTbody => "users-tbody",
            MountPoint::UsersList => "users-list",
            MountPoint::SelectedUserName => "selected-user-name",
            MountPoint::WheelsList => "wheels-list",
            MountPoint::StatisticsContent => "statistics-content",
            MountPoint::ModalTitle => "modal-title",
            MountPoint::ModalData => "modal-data",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub active_tab: Tab,
    pub modal_visible: bool,
    pub modal_loading_visible: bool,
    mounts: HashMap<MountPoint, Markup>,
}

impl Document {
    pub fn new(active_tab: Tab, modal_visible: bool, modal_loading_visible: bool) -> Self {
        Self {
            active_tab,
            modal_visible,
            modal_loading_visible,
            mounts: MountPoint::ALL
                .iter()
                .map(|point| (*point, html! {}))
                .collect(),
        }
    }

    pub fn mount(&mut self, point: MountPoint, content: Markup) {
        self.mounts.insert(point, content);
    }

    /// Inner HTML of `point`; every mount point starts out empty.
    pub fn inner_html(&self, point: MountPoint) -> &str {
        self.mounts
            .get(&point)
            .map(|markup| markup.0.as_str())
            .unwrap_or_default()
    }

    fn slot(&self, point: MountPoint) -> PreEscaped<&str> {
        PreEscaped(self.inner_html(point))
    }

    /// The complete page with every mount point filled in.
    pub fn to_page(&self) -> String {
        let active = self.active_tab;
        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "Wheel of Life admin" }
                }
                body {
                    div.container {
                        header { h1 { "Wheel of Life admin" } }
                        nav.tabs {
                            @for tab in Tab::ALL {
                                button.tab-button.active[tab == active] data-tab=(tab) {
                                    (tab.title())
                                }
                            }
                        }

                        div.tab-content.active[active == Tab::Users] id="users-tab" {
                            table.users-table {
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Telegram ID" }
                                        th { "First name" }
                                        th { "Username" }
                                        th { "Registered" }
                                        th { "Last action" }
                                    }
                                }
                                tbody id=(MountPoint::UsersTbody.id()) {
                                    (self.slot(MountPoint::UsersTbody))
                                }
                            }
                        }

                        div.tab-content.active[active == Tab::Wheels] id="wheels-tab" {
                            div.wheels-layout {
                                div.users-list id=(MountPoint::UsersList.id()) {
                                    (self.slot(MountPoint::UsersList))
                                }
                                div.wheels-panel {
                                    h2 id=(MountPoint::SelectedUserName.id()) {
                                        (self.slot(MountPoint::SelectedUserName))
                                    }
                                    div id=(MountPoint::WheelsList.id()) {
                                        (self.slot(MountPoint::WheelsList))
                                    }
                                }
                            }
                        }

                        div.tab-content.active[active == Tab::Statistics] id="statistics-tab" {
                            div.stats-grid id=(MountPoint::StatisticsContent.id()) {
                                (self.slot(MountPoint::StatisticsContent))
                            }
                        }
                    }

                    div.modal id="detail-modal" style=(display(self.modal_visible)) {
                        div.modal-content {
                            span.close { "×" }
                            h2 id=(MountPoint::ModalTitle.id()) {
                                (self.slot(MountPoint::ModalTitle))
                            }
                            div.loading id="modal-loading" style=(display(self.modal_loading_visible)) {
                                (LOADING)
                            }
                            div id=(MountPoint::ModalData.id()) {
                                (self.slot(MountPoint::ModalData))
                            }
                        }
                    }
                }
            }
        };
        page.into_string()
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}
