mod controls;
mod panels;
mod rows;
