// Domain layer: conversion models and the ports the shell implements.

pub mod model;
pub mod ports;
