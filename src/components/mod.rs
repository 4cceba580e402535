// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interactive UI components.
//!
//! Each component owns its widget state, renders itself through
//! [`Render`](crate::render::Render), and turns raw terminal events into
//! component-level actions for the event handlers.

pub(crate) mod controls;
pub(crate) mod task_form;
pub(crate) mod task_list;

pub(crate) use controls::{ControlTarget, Controls};
pub(crate) use task_form::TaskForm;
pub(crate) use task_list::{TaskListAction, TaskListView, TaskRow};
