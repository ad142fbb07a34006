/*
[INPUT]:  User intents (refresh, create, delegate) and adapter clients
[OUTPUT]: Normalized task lists, broadcast hashes, delegation outcomes
[POS]:    Flow orchestration layer shared by CLI, interactive, and TUI modes
[UPDATE]: When flows change or new user intents are added
*/

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use rust_decimal::Decimal;
use tracing::{error, info};

use taskmarket_adapter::{
    parse_amount, GatewayClient, MarketError, PemWallet, PostTask, Task, TransactionSigner,
    WorkerClient,
};

use crate::config::DashboardConfig;

/// Native token decimal precision used to denominate rewards
pub const REWARD_DECIMALS: u32 = 18;

/// The four creation-form fields, as entered. Kept as strings so the
/// submit gate ("every field non-empty") matches what the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTaskInput {
    pub docker_image_uri: String,
    pub input_data_uri: String,
    pub max_workers: String,
    pub reward: String,
}

impl CreateTaskInput {
    /// Presence check: submission stays disabled until this is true.
    pub fn is_complete(&self) -> bool {
        !self.docker_image_uri.trim().is_empty()
            && !self.input_data_uri.trim().is_empty()
            && !self.max_workers.trim().is_empty()
            && !self.reward.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_complete() {
            bail!("all four fields are required");
        }
        let max_workers = self.max_workers()?;
        if max_workers == 0 {
            bail!("max workers must be at least 1");
        }
        let reward = Decimal::from_str(self.reward.trim())
            .map_err(|_| anyhow!("reward must be a decimal amount"))?;
        if reward <= Decimal::ZERO {
            bail!("reward must be greater than 0");
        }
        Ok(())
    }

    pub fn max_workers(&self) -> Result<u32> {
        self.max_workers
            .trim()
            .parse()
            .context("max workers must be a whole number")
    }
}

/// What the delegation hand-off ended as. The wording of the user-facing
/// message differs for all three.
#[derive(Debug, Clone, PartialEq)]
pub enum DelegationOutcome {
    Processed { tx_hash: String },
    Rejected { message: String },
    Unreachable,
}

/// Owns the adapter clients and runs the three user flows. Every failure
/// path returns the caller to an idle, retryable state; nothing here is
/// fatal and nothing retries on its own.
pub struct Dashboard {
    gateway: GatewayClient,
    worker: WorkerClient,
    contract_address: String,
    worker_url: String,
    page_size: u64,
    gas_limit: u64,
    signer: Option<Box<dyn TransactionSigner>>,
}

impl Dashboard {
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let gateway = GatewayClient::new(&config.gateway_url).context("gateway client")?;
        let worker = WorkerClient::new(&config.worker_url).context("worker client")?;
        let signer = match &config.wallet_pem {
            Some(path) => Some(Box::new(PemWallet::from_file(path).context("load wallet pem")?)
                as Box<dyn TransactionSigner>),
            None => None,
        };
        Ok(Self {
            gateway,
            worker,
            contract_address: config.contract_address.clone(),
            worker_url: config.worker_url.clone(),
            page_size: config.page_size,
            gas_limit: config.gas_limit,
            signer,
        })
    }

    /// Replace the transaction signer (tests, external signing services)
    pub fn set_signer(&mut self, signer: Box<dyn TransactionSigner>) {
        self.signer = Some(signer);
    }

    pub fn worker_url(&self) -> &str {
        &self.worker_url
    }

    /// Fetch the first page of the board. The list is rebuilt from scratch
    /// on every call; nothing is cached between refreshes.
    pub async fn refresh_board(&self) -> Result<Vec<Task>> {
        self.gateway
            .list_tasks(&self.contract_address, 0, self.page_size)
            .await
            .context("fetch tasks")
    }

    /// Probe a single task slot
    pub async fn task(&self, id: u64) -> Result<Option<Task>> {
        self.gateway
            .query_task(&self.contract_address, id)
            .await
            .context("fetch task")
    }

    /// Validate the form, denominate the reward, and submit exactly one
    /// postTask transaction.
    pub async fn create_task(&self, input: &CreateTaskInput) -> Result<String> {
        input.validate()?;
        let reward_base_units = parse_amount(input.reward.trim(), REWARD_DECIMALS)?;
        let signer = self
            .signer
            .as_deref()
            .ok_or_else(|| anyhow!("no wallet configured; set wallet_pem in the config file"))?;

        let tx_hash = self
            .gateway
            .post_task(
                PostTask {
                    contract_address: &self.contract_address,
                    docker_image_uri: input.docker_image_uri.trim(),
                    input_data_uri: input.input_data_uri.trim(),
                    max_workers: input.max_workers()?,
                    reward_base_units: &reward_base_units,
                    gas_limit: self.gas_limit,
                },
                signer,
            )
            .await
            .context("submit postTask transaction")?;
        info!(%tx_hash, "task created");
        Ok(tx_hash)
    }

    /// Hand one task to the local worker. Never bubbles an error: every
    /// failure becomes one of the outcome variants, worded for the user.
    pub async fn delegate(&self, task: &Task) -> DelegationOutcome {
        match self
            .worker
            .process_task(task.id, &task.docker_image_uri, &task.input_data_uri)
            .await
        {
            Ok(receipt) => DelegationOutcome::Processed {
                tx_hash: receipt.tx_hash,
            },
            Err(err) if err.is_connectivity() => {
                error!(task_id = task.id, error = %err, "worker unreachable");
                DelegationOutcome::Unreachable
            }
            Err(MarketError::WorkerService { message }) => {
                DelegationOutcome::Rejected { message }
            }
            Err(err) => DelegationOutcome::Rejected {
                message: err.to_string(),
            },
        }
    }
}
